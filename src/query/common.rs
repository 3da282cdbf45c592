//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`]
//! paging fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for paging.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the maximum number of results to return. The API documents a cap
    /// of 100; out-of-range values are passed through and rejected server-side.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the results offset. The API default is 0.
    fn with_offset(mut self, offset: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset);
        self
    }
}

/// Paging fields shared by every endpoint query.
#[derive(Clone, Copy, Default)]
pub struct QueryCommon {
    /// Max results per page. `None` uses the API default of 25.
    pub limit: Option<i64>,
    /// Results offset. `None` uses the API default of 0.
    pub offset: Option<i64>,
}

impl QueryCommon {
    /// Appends the common paging parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        url
    }
}
