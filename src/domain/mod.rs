mod expense;
mod ledger;
mod money;
mod query;

pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use query::*;
