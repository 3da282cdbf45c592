//! Tolerant field-level deserializers for quirks in the wire format.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serializer};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Decodes a list, dropping elements that fail to decode instead of failing
/// the whole response. The API occasionally ships individual items that are
/// missing required fields; the rest of the page is still useful.
pub(crate) fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let mut items = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<T>(value) {
            Ok(item) => items.push(item),
            Err(err) => tracing::warn!("dropping malformed list item: {}", err),
        }
    }
    Ok(items)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

fn coerce(raw: NumberOrString) -> Result<i64, String> {
    match raw {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) if s.is_empty() => Ok(0),
        NumberOrString::String(s) => s
            .parse()
            .map_err(|_| format!("invalid integer value {s:?}")),
    }
}

/// Rendition dimensions arrive as either numbers or numeric strings, with the
/// empty string standing in for zero.
pub(crate) fn dimension<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    coerce(NumberOrString::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

pub(crate) fn optional_dimension<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => coerce(raw).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Datetimes arrive as `"YYYY-MM-DD HH:MM:SS"`. The API uses an all-zero
/// placeholder for unset values, which does not parse and maps to `None`.
pub(crate) fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).ok()))
}

pub(crate) fn datetime_as_string<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Dimensions {
        #[serde(deserialize_with = "super::dimension")]
        width: i64,
        #[serde(default, deserialize_with = "super::optional_dimension")]
        size: Option<i64>,
    }

    #[test]
    fn dimension_accepts_numbers_and_strings() {
        let parsed: Dimensions = serde_json::from_str(r#"{"width": "200", "size": 1024}"#).unwrap();
        assert_eq!(parsed.width, 200);
        assert_eq!(parsed.size, Some(1024));

        let parsed: Dimensions = serde_json::from_str(r#"{"width": 480, "size": ""}"#).unwrap();
        assert_eq!(parsed.width, 480);
        assert_eq!(parsed.size, Some(0));
    }

    #[test]
    fn dimension_rejects_garbage() {
        let result = serde_json::from_str::<Dimensions>(r#"{"width": "wide"}"#);
        assert!(result.is_err());
    }

    #[derive(Deserialize)]
    struct Dates {
        #[serde(default, deserialize_with = "super::optional_datetime")]
        imported: Option<chrono::NaiveDateTime>,
    }

    #[test]
    fn placeholder_datetime_maps_to_none() {
        let parsed: Dates =
            serde_json::from_str(r#"{"imported": "0000-00-00 00:00:00"}"#).unwrap();
        assert!(parsed.imported.is_none());

        let parsed: Dates = serde_json::from_str(r#"{"imported": "2017-05-04 13:40:19"}"#).unwrap();
        assert!(parsed.imported.is_some());
    }
}
