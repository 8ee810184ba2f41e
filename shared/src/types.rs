//! Common types used across the client

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Page sizes offered by the inventory table
pub const PAGE_SIZES: [u32; 4] = [8, 15, 30, 50];

/// Rows per page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Eight,
    Fifteen,
    Thirty,
    Fifty,
}

impl PageSize {
    pub fn get(self) -> u32 {
        match self {
            PageSize::Eight => 8,
            PageSize::Fifteen => 15,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = &'static str;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        match size {
            8 => Ok(PageSize::Eight),
            15 => Ok(PageSize::Fifteen),
            30 => Ok(PageSize::Thirty),
            50 => Ok(PageSize::Fifty),
            _ => Err("Page size must be one of 8, 15, 30 or 50"),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// Page request sent to the inventory endpoint (0-based page index)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: PageSize::default().get(),
        }
    }
}

/// One page of results as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: None,
            number: None,
            size: None,
        }
    }
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_pages: u32) -> Self {
        Self {
            content,
            total_pages,
            ..Self::default()
        }
    }
}

/// Deserialize `null` as the type's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional `YYYY-MM-DD` date.
///
/// `null`, empty strings and unparsable values all map to `None`, so a record
/// with a malformed expiry date is treated as never expiring.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_date))
}

/// Deserialize an optional ISO timestamp, mapping anything unreadable to `None`
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<NaiveDateTime>().ok()))
}

/// Parse a calendar date, ignoring any time-of-day suffix
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
