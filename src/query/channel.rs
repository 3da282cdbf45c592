use url::Url;

use crate::types::MediaType;

use super::common::{Query, QueryCommon};

/// Query for a channel's content feed.
#[derive(Default)]
pub struct ChannelContentQuery {
    pub common: QueryCommon,
    /// Selects the gifs or stickers variant of the endpoint path.
    pub media_type: Option<MediaType>,
}

impl ChannelContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }
}

impl Query for ChannelContentQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
