//! Asynchronous client for the Giphy API with cancellable, exactly-once
//! completion semantics.

mod client;
mod completion;
mod errors;
mod query;
mod session;
mod task;
pub mod types;

pub use self::client::Client;
pub use self::completion::Completion;
pub use self::errors::Error;
pub use self::query::{
    CategoriesQuery, ChannelContentQuery, Query, QueryCommon, RandomQuery, SearchQuery,
    TranslateQuery, TrendingQuery,
};
pub use self::session::{DefaultSession, RawResponse, Session};
pub use self::task::{RequestHandle, TaskStatus};
