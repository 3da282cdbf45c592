use url::Url;

use crate::types::{MediaType, Rating};

use super::common::{Query, QueryCommon};

/// Query for the trending endpoint.
#[derive(Default)]
pub struct TrendingQuery {
    pub common: QueryCommon,
    /// Selects the gifs or stickers variant of the endpoint path.
    pub media_type: Option<MediaType>,
    pub rating: Option<Rating>,
}

impl TrendingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Query for TrendingQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(rating) = self.rating {
            url.query_pairs_mut()
                .append_pair("rating", &rating.to_string());
        }
        url
    }
}
