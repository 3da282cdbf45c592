mod common;
pub use self::common::{Query, QueryCommon};

mod search;
pub use self::search::SearchQuery;

mod trending;
pub use self::trending::TrendingQuery;

mod translate;
pub use self::translate::TranslateQuery;

mod random;
pub use self::random::RandomQuery;

mod category;
pub use self::category::CategoriesQuery;

mod channel;
pub use self::channel::ChannelContentQuery;
