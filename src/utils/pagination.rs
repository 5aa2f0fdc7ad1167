use serde::{Deserialize, Deserializer, Serialize};

/// Query-string values arrive as strings; when these params sit behind
/// `#[serde(flatten)]` the urlencoded deserializer refuses to parse numbers
/// directly, so accept an optional string and parse it ourselves.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page_number: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page_size: Option<i64>,
}

impl PageParams {
    pub fn page_number(&self) -> i64 {
        self.page_number.unwrap_or(1).max(1)
    }

    /// Page size is clamped from below only; callers may request arbitrarily
    /// large pages and capping them is left to the deployment edge.
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(10).max(1)
    }

    pub fn offset(&self) -> i64 {
        (self.page_number() - 1).saturating_mul(self.page_size())
    }
}

/// One page of a filtered, sorted collection plus the navigation metadata
/// clients need to render pagers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_count: i64, page_number: i64, page_size: i64) -> Self {
        // Callers clamp through PageParams, but the math must hold for any
        // direct construction too.
        let page_size = page_size.max(1);
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + page_size - 1) / page_size
        };

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_next: page_number < total_pages,
            has_previous: page_number > 1,
        }
    }
}
