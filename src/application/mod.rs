// Application layer - the in-memory ledger and the values it hands to clients.

pub mod config;
pub mod error;
pub mod reporting;
pub mod service;

pub use config::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
