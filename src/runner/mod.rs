// Child process execution with an isolated environment.

mod run;
mod types;

pub use run::run;
pub use types::{Abnormal, CommandLine, Outcome};
