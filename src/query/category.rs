use url::Url;

use super::common::{Query, QueryCommon};

/// Paging-only query used by the categories, subcategories, and
/// category-scoped gif listings.
#[derive(Default)]
pub struct CategoriesQuery {
    pub common: QueryCommon,
}

impl CategoriesQuery {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Query for CategoriesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
