//! HTTP client for the Giphy API: one method per endpoint.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::query::{
    CategoriesQuery, ChannelContentQuery, Query, RandomQuery, SearchQuery, TranslateQuery,
    TrendingQuery,
};
use crate::session::{DefaultSession, Session};
use crate::task::{RequestHandle, RequestTask};
use crate::types::{ApiResponse, Category, ListResponse, Media, MediaType, SingleResponse};
use crate::Error;

const DEFAULT_API_URL: &str = "https://api.giphy.com";

/// Client for the Giphy API.
///
/// Every method builds the endpoint URL, spawns a request task onto the
/// ambient tokio runtime, and returns a [`RequestHandle`] without blocking on
/// I/O. The outcome arrives through the completion closure, invoked at most
/// once on the worker that ran the request; see the `completion` module for
/// the delivery contract. Methods must therefore be called from within a
/// tokio runtime.
pub struct Client<S = DefaultSession> {
    /// Key identifying the calling application, appended to every request.
    api_key: String,
    /// Base URL for the API. Defaults to `https://api.giphy.com`.
    base_api_url: String,
    session: Arc<S>,
}

impl Client<DefaultSession> {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_api_url: DEFAULT_API_URL.to_string(),
            session: Arc::new(DefaultSession::new()),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_api_url: base_url.to_string(),
            session: Arc::new(DefaultSession::new()),
        }
    }
}

impl<S: Session + 'static> Client<S> {
    /// Creates a client over a caller-supplied transport session.
    pub fn with_session(api_key: &str, base_url: &str, session: S) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_api_url: base_url.to_string(),
            session: Arc::new(session),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::Transport(format!("invalid request URL: {e}"))
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    fn dispatch<T, F>(&self, url: Url, completion: F) -> RequestHandle
    where
        T: ApiResponse + DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, Error>) + Send + 'static,
    {
        RequestTask::new(Arc::clone(&self.session), url).dispatch(Box::new(completion))
    }

    /// Path segment for the gifs/stickers variants of an endpoint. Unknown
    /// media kinds fall back to gifs.
    fn media_path(media_type: Option<MediaType>, suffix: &str) -> String {
        let segment = match media_type {
            Some(MediaType::Sticker) => "stickers",
            _ => "gifs",
        };
        format!("/v1/{}/{}", segment, suffix)
    }

    /// Searches for gifs or stickers matching a term or phrase.
    pub fn search<F>(&self, query: &SearchQuery, completion: F) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(&Self::media_path(query.media_type, "search"), Some(query))?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches the currently trending gifs or stickers.
    pub fn trending<F>(&self, query: &TrendingQuery, completion: F) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(&Self::media_path(query.media_type, "trending"), Some(query))?;
        Ok(self.dispatch(url, completion))
    }

    /// Translates a term or phrase into a single matching item.
    pub fn translate<F>(
        &self,
        query: &TranslateQuery,
        completion: F,
    ) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<SingleResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(&Self::media_path(query.media_type, "translate"), Some(query))?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches a random item, optionally limited by tag.
    pub fn random<F>(&self, query: &RandomQuery, completion: F) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<SingleResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(&Self::media_path(query.media_type, "random"), Some(query))?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches the list of top-level content categories.
    pub fn categories<F>(
        &self,
        query: &CategoriesQuery,
        completion: F,
    ) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Category>, Error>) + Send + 'static,
    {
        let url = self.get_url("/v1/gifs/categories", Some(query))?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches the subcategories of a category, addressed by its encoded
    /// name.
    pub fn subcategories<F>(
        &self,
        category_encoded_name: &str,
        query: &CategoriesQuery,
        completion: F,
    ) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Category>, Error>) + Send + 'static,
    {
        let url = self.get_url(
            format!("/v1/gifs/categories/{}", category_encoded_name).as_str(),
            Some(query),
        )?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches the gifs belonging to a category and subcategory.
    pub fn gifs_by_category<F>(
        &self,
        category_encoded_name: &str,
        subcategory_encoded_name: &str,
        query: &CategoriesQuery,
        completion: F,
    ) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(
            format!(
                "/v1/gifs/categories/{}/{}",
                category_encoded_name, subcategory_encoded_name
            )
            .as_str(),
            Some(query),
        )?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches the content feed of a channel.
    pub fn channel_content<F>(
        &self,
        channel_id: &str,
        query: &ChannelContentQuery,
        completion: F,
    ) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Media>, Error>) + Send + 'static,
    {
        let segment = match query.media_type {
            Some(MediaType::Sticker) => "stickers",
            _ => "gifs",
        };
        let url = self.get_url(
            format!("/v1/channels/{}/{}", channel_id, segment).as_str(),
            Some(query),
        )?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches a single gif by its id.
    pub fn gif_by_id<F>(&self, gif_id: &str, completion: F) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<SingleResponse<Media>, Error>) + Send + 'static,
    {
        let url = self.get_url(
            format!("/v1/gifs/{}", gif_id).as_str(),
            None::<&CategoriesQuery>,
        )?;
        Ok(self.dispatch(url, completion))
    }

    /// Fetches multiple gifs in one round trip by their ids.
    pub fn gif_by_ids<F>(&self, gif_ids: &[String], completion: F) -> Result<RequestHandle, Error>
    where
        F: FnOnce(Result<ListResponse<Media>, Error>) + Send + 'static,
    {
        let mut url = self.get_url("/v1/gifs", None::<&CategoriesQuery>)?;
        url.query_pairs_mut()
            .append_pair("ids", &gif_ids.join(","));
        Ok(self.dispatch(url, completion))
    }
}
