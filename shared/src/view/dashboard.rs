//! Dashboard snapshot holder

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{aggregate_sales, available_stock, derive_visible_rows, PageControls, SalesAggregate, ViewState};
use crate::models::{Medicine, SaleEvent, Supplier};
use crate::types::Page;

/// Latest data delivered by the API plus the table's view state.
///
/// Each `replace_*` installs the snapshot as delivered, replacing whatever
/// was there: when responses race, the one applied last wins. All queries
/// are recomputed from the current snapshot on every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardModel {
    pub view: ViewState,
    pub inventory: Page<Medicine>,
    pub sales: Vec<SaleEvent>,
    pub suppliers: Vec<Supplier>,
}

impl DashboardModel {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn replace_inventory(&mut self, page: Page<Medicine>) {
        self.inventory = page;
    }

    pub fn replace_sales(&mut self, sales: Vec<SaleEvent>) {
        self.sales = sales;
    }

    pub fn replace_suppliers(&mut self, suppliers: Vec<Supplier>) {
        self.suppliers = suppliers;
    }

    pub fn visible_rows(&self, today: NaiveDate) -> Vec<&Medicine> {
        derive_visible_rows(&self.inventory.content, &self.view, today)
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(&self.view, self.inventory.total_pages)
    }

    pub fn sales_summary(&self) -> SalesAggregate {
        aggregate_sales(&self.sales)
    }

    pub fn available_stock(&self, medicine_name: &str) -> u32 {
        available_stock(medicine_name, &self.inventory.content)
    }
}
