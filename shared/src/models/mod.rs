//! Domain models for the Pharmacy Manager

mod billing;
mod medicine;
mod sale;
mod supplier;
mod user;

pub use billing::*;
pub use medicine::*;
pub use sale::*;
pub use supplier::*;
pub use user::*;
