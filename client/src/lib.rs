//! Pharmacy Manager API client
//!
//! Typed async access to the remote pharmacy API plus the configuration the
//! `pharmacy-dashboard` binary runs with. Business rules live in the API;
//! this crate validates forms before sending and reports failures unchanged.

pub mod api;
pub mod config;
pub mod error;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
