// Application layer: runs one action per invocation against a loaded ledger.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
