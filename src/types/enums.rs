use serde::{Deserialize, Serialize};

/// Kind of media item served by the API.
///
/// Unrecognized wire values decode to [`MediaType::Unknown`] so that server-side
/// additions never fail an otherwise valid item.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Gif,
    Sticker,
    Unknown,
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "gif" => MediaType::Gif,
            "sticker" => MediaType::Sticker,
            _ => MediaType::Unknown,
        })
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MediaType::Gif => "gif",
                MediaType::Sticker => "sticker",
                MediaType::Unknown => "unknown",
            }
        )
    }
}

/// Content rating of a media item. Used both as a decoded model field and as a
/// query filter. Unrecognized wire values decode to [`Rating::Unknown`].
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Y,
    G,
    Pg,
    #[serde(rename = "pg-13")]
    Pg13,
    R,
    Unrated,
    Nsfw,
    Unknown,
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "y" => Rating::Y,
            "g" => Rating::G,
            "pg" => Rating::Pg,
            "pg-13" => Rating::Pg13,
            "r" => Rating::R,
            "unrated" => Rating::Unrated,
            "nsfw" => Rating::Nsfw,
            _ => Rating::Unknown,
        })
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rating::Y => "y",
                Rating::G => "g",
                Rating::Pg => "pg",
                Rating::Pg13 => "pg-13",
                Rating::R => "r",
                Rating::Unrated => "unrated",
                Rating::Nsfw => "nsfw",
                Rating::Unknown => "unknown",
            }
        )
    }
}

/// Default country for regional content, sent as a 2-letter ISO 639-1 code
/// (plus the two Chinese locales). Only used as a query filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    English,
    Spanish,
    Portuguese,
    Indonesian,
    French,
    Arabic,
    Turkish,
    Thai,
    Vietnamese,
    German,
    Italian,
    Japanese,
    ChineseSimplified,
    ChineseTraditional,
    Russian,
    Korean,
    Polish,
    Dutch,
    Romanian,
    Hungarian,
    Swedish,
    Czech,
    Hindi,
    Bengali,
    Danish,
    Farsi,
    Filipino,
    Finnish,
    Hebrew,
    Malay,
    Norwegian,
    Ukrainian,
}

impl Lang {
    /// The code sent on the wire for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Spanish => "es",
            Lang::Portuguese => "pt",
            Lang::Indonesian => "id",
            Lang::French => "fr",
            Lang::Arabic => "ar",
            Lang::Turkish => "tr",
            Lang::Thai => "th",
            Lang::Vietnamese => "vi",
            Lang::German => "de",
            Lang::Italian => "it",
            Lang::Japanese => "ja",
            Lang::ChineseSimplified => "zh-CN",
            Lang::ChineseTraditional => "zh-TW",
            Lang::Russian => "ru",
            Lang::Korean => "ko",
            Lang::Polish => "pl",
            Lang::Dutch => "nl",
            Lang::Romanian => "ro",
            Lang::Hungarian => "hu",
            Lang::Swedish => "sv",
            Lang::Czech => "cs",
            Lang::Hindi => "hi",
            Lang::Bengali => "bn",
            Lang::Danish => "da",
            Lang::Farsi => "fa",
            Lang::Filipino => "tl",
            Lang::Finnish => "fi",
            Lang::Hebrew => "iw",
            Lang::Malay => "ms",
            Lang::Norwegian => "no",
            Lang::Ukrainian => "uk",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
