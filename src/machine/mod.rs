// Machine resolution: invoke the inspection provider and decode its output.

pub mod inspect;
mod types;

pub use inspect::{DEFAULT_PROVIDER, Inspector, decode};
pub use types::Machine;
