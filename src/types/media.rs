use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de;
use super::enums::{MediaType, Rating};

/// One GIF or sticker. Immutable after decode.
///
/// Only `id` and `images` are required; everything else is tolerated as
/// missing. Unknown fields in the wire item are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Media {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(rename = "type", default)]
    pub media_type: MediaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tld: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_post_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Rendition name (`"original"`, `"fixed_width"`, ...) to encoded asset.
    /// Keys outside the known set are preserved.
    pub images: BTreeMap<String, Rendition>,

    #[serde(
        default,
        deserialize_with = "de::optional_datetime",
        serialize_with = "de::datetime_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub import_datetime: Option<NaiveDateTime>,

    #[serde(
        default,
        deserialize_with = "de::optional_datetime",
        serialize_with = "de::datetime_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub trending_datetime: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottle_data: Option<BottleData>,
}

impl Media {
    /// Looks up one of the well-known renditions.
    pub fn rendition(&self, kind: RenditionType) -> Option<&Rendition> {
        self.images.get(kind.as_str())
    }
}

/// One encoded asset variant of a [`Media`] item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Rendition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "de::dimension")]
    pub width: i64,

    #[serde(default, deserialize_with = "de::dimension")]
    pub height: i64,

    /// Size of the asset in bytes.
    #[serde(
        default,
        deserialize_with = "de::optional_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::optional_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub mp4_size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::optional_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub webp_size: Option<i64>,
}

/// Names of the renditions the API is known to serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenditionType {
    Original,
    OriginalStill,
    Preview,
    Looping,
    FixedHeight,
    FixedHeightStill,
    FixedHeightDownsampled,
    FixedHeightSmall,
    FixedHeightSmallStill,
    FixedWidth,
    FixedWidthStill,
    FixedWidthDownsampled,
    FixedWidthSmall,
    FixedWidthSmallStill,
    Downsized,
    DownsizedStill,
    DownsizedSmall,
    DownsizedMedium,
    DownsizedLarge,
}

impl RenditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenditionType::Original => "original",
            RenditionType::OriginalStill => "original_still",
            RenditionType::Preview => "preview",
            RenditionType::Looping => "looping",
            RenditionType::FixedHeight => "fixed_height",
            RenditionType::FixedHeightStill => "fixed_height_still",
            RenditionType::FixedHeightDownsampled => "fixed_height_downsampled",
            RenditionType::FixedHeightSmall => "fixed_height_small",
            RenditionType::FixedHeightSmallStill => "fixed_height_small_still",
            RenditionType::FixedWidth => "fixed_width",
            RenditionType::FixedWidthStill => "fixed_width_still",
            RenditionType::FixedWidthDownsampled => "fixed_width_downsampled",
            RenditionType::FixedWidthSmall => "fixed_width_small",
            RenditionType::FixedWidthSmallStill => "fixed_width_small_still",
            RenditionType::Downsized => "downsized",
            RenditionType::DownsizedStill => "downsized_still",
            RenditionType::DownsizedSmall => "downsized_small",
            RenditionType::DownsizedMedium => "downsized_medium",
            RenditionType::DownsizedLarge => "downsized_large",
        }
    }
}

impl std::fmt::Display for RenditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Experiment metadata occasionally attached to items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BottleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
