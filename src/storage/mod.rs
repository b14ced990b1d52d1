mod codec;
mod store;

pub use codec::*;
pub use store::*;
