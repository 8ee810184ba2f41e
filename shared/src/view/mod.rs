//! Inventory view-model
//!
//! Pure derivations over an already-fetched snapshot: stock classification,
//! the visible rows of the inventory table, sales statistics and the stock
//! available for billing. Nothing in here performs I/O or keeps hidden state;
//! the same inputs always produce the same output.

mod dashboard;
mod rows;
mod sales;
mod state;
mod status;
mod stock;

pub use dashboard::*;
pub use rows::*;
pub use sales::*;
pub use state::*;
pub use status::*;
pub use stock::*;
