pub(crate) mod de;

mod category;
pub use self::category::Category;

mod enums;
pub use self::enums::{Lang, MediaType, Rating};

mod media;
pub use self::media::{BottleData, Media, Rendition, RenditionType};

mod meta;
pub use self::meta::{ApiResponse, ListResponse, Meta, Pagination, SingleResponse};
