//! Sales ledger models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::lenient_datetime;

/// A recorded sale, as listed by the sales endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub medicine_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_unit: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_date: Option<NaiveDateTime>,
}

impl SaleEvent {
    pub fn new(medicine_name: impl Into<String>, quantity: u32, total_price: Decimal) -> Self {
        Self {
            id: None,
            medicine_name: medicine_name.into(),
            quantity,
            total_price,
            price_per_unit: None,
            sale_date: None,
        }
    }
}
