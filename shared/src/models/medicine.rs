//! Medicine inventory models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{lenient_date, null_as_default};

/// A medicine record as held by the inventory API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Opaque identifier assigned by the API
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units currently in stock
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<NaiveDate>,
    /// Server-side expiry flag; when true it overrides the date comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

/// Add/edit medicine form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MedicineForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    /// `YYYY-MM-DD`, or empty when the medicine does not expire
    #[serde(default)]
    pub expiry_date: String,
}

impl From<&Medicine> for MedicineForm {
    fn from(medicine: &Medicine) -> Self {
        Self {
            name: medicine.name.clone(),
            description: medicine.description.clone(),
            price: medicine.price,
            quantity: medicine.quantity,
            expiry_date: medicine
                .expiry_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}
