use serde::{Deserialize, Serialize};

use super::media::Media;

/// A browsable content category, optionally carrying its subcategories and a
/// representative gif.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,

    /// URL-safe name, used as the path segment for subcategory and
    /// category-scoped gif listings.
    pub name_encoded: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<Category>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif: Option<Media>,
}
