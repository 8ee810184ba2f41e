//! Stock and expiry classification

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Medicine;

/// Records with at most this many units (and at least one) are low on stock
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Display status of a medicine; exactly one applies per record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Expired")]
    Expired,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Available => write!(f, "Available"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
            StockStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Status filter offered above the inventory table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Expired")]
    Expired,
}

impl StatusFilter {
    /// Whether a record with `status` passes this filter.
    ///
    /// `Available` admits everything that can still be sold, low-stock
    /// records included.
    pub fn matches(self, status: StockStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => {
                matches!(status, StockStatus::Available | StockStatus::LowStock)
            }
            StatusFilter::LowStock => status == StockStatus::LowStock,
            StatusFilter::OutOfStock => status == StockStatus::OutOfStock,
            StatusFilter::Expired => status == StockStatus::Expired,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Available" => Ok(StatusFilter::Available),
            "Low Stock" => Ok(StatusFilter::LowStock),
            "Out of Stock" => Ok(StatusFilter::OutOfStock),
            "Expired" => Ok(StatusFilter::Expired),
            _ => Err("Unknown status filter"),
        }
    }
}

/// Whether a medicine is past its expiry.
///
/// A server-side `expired` flag wins; otherwise the expiry date is compared
/// with `today` as a calendar date. No expiry date means it never expires.
pub fn is_expired(medicine: &Medicine, today: NaiveDate) -> bool {
    if medicine.expired == Some(true) {
        return true;
    }
    medicine.expiry_date.is_some_and(|expiry| expiry < today)
}

/// Classify a medicine (expiry takes precedence over stock level)
pub fn classify(medicine: &Medicine, today: NaiveDate) -> StockStatus {
    if is_expired(medicine, today) {
        return StockStatus::Expired;
    }
    match medicine.quantity {
        0 => StockStatus::OutOfStock,
        1..=LOW_STOCK_THRESHOLD => StockStatus::LowStock,
        _ => StockStatus::Available,
    }
}
