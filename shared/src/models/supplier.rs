//! Supplier models

use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// A supplier registered by the current admin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// New supplier form; `Default` is the cleared form shown after a submit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplierForm {
    pub name: String,
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}
