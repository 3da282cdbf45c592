use url::Url;

use crate::types::{Lang, MediaType, Rating};

use super::common::{Query, QueryCommon};

/// Query for the translate endpoint, which maps a term or phrase to a single
/// item. The term travels as the `s` parameter.
#[derive(Default)]
pub struct TranslateQuery {
    pub common: QueryCommon,
    /// Term or phrase to translate into a gif.
    pub term: String,
    /// Selects the gifs or stickers variant of the endpoint path.
    pub media_type: Option<MediaType>,
    pub rating: Option<Rating>,
    pub lang: Option<Lang>,
}

impl TranslateQuery {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            ..Self::default()
        }
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }
}

impl Query for TranslateQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut().append_pair("s", &self.term);
        if let Some(rating) = self.rating {
            url.query_pairs_mut()
                .append_pair("rating", &rating.to_string());
        }
        if let Some(lang) = self.lang {
            url.query_pairs_mut().append_pair("lang", lang.code());
        }
        url
    }
}
