//! Shared types and models for the Pharmacy Manager
//!
//! This crate contains the domain models, the inventory view-model and the
//! form validators used by both the native API client and the browser (via WASM).

pub mod models;
pub mod types;
pub mod validation;
pub mod view;

pub use models::*;
pub use types::*;
pub use validation::*;
pub use view::*;
