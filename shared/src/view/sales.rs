//! Sales statistics

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SaleEvent;

/// Sales totals for one medicine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineSales {
    pub name: String,
    pub total_qty: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_rev: Decimal,
}

/// Revenue summary shown in the sales dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalesAggregate {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// In the order each medicine first appears in the ledger
    pub by_medicine: Vec<MedicineSales>,
}

/// Total revenue plus a per-medicine breakdown of the sales ledger
pub fn aggregate_sales(sales: &[SaleEvent]) -> SalesAggregate {
    let mut total_revenue = Decimal::ZERO;
    let mut by_medicine: Vec<MedicineSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        total_revenue += sale.total_price;

        let slot = *index.entry(sale.medicine_name.as_str()).or_insert_with(|| {
            by_medicine.push(MedicineSales {
                name: sale.medicine_name.clone(),
                total_qty: 0,
                total_rev: Decimal::ZERO,
            });
            by_medicine.len() - 1
        });
        let entry = &mut by_medicine[slot];
        entry.total_qty += u64::from(sale.quantity);
        entry.total_rev += sale.total_price;
    }

    SalesAggregate {
        total_revenue,
        by_medicine,
    }
}
