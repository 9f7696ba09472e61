//! Run a command in the environment of a docker-machine host.
//!
//! The flow is linear: inspect the machine with the provider, project the
//! `DOCKER_*` variables from it, then run the command with exactly those
//! variables and hand back its exit code.

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod machine;
pub mod runner;

use tracing::info;

pub use cli::{Cli, Invocation};
pub use error::{Error, Result};

/// Resolve the machine, run the command in its environment and return the
/// command's exit code.
///
/// Provider failures abort before the command is started. A command that
/// does not exit normally is an [`Error::AbnormalTermination`].
pub fn execute(invocation: &Invocation) -> Result<i32> {
    let inspector = machine::Inspector::new(&invocation.provider)?.strict(invocation.strict);
    let machine = inspector.inspect(&invocation.machine)?;
    let vars = env::machine_env(&machine);
    info!(machine = machine.name(), host = vars.get(env::HOST), "using docker machine");

    let outcome = runner::run(&invocation.command, &vars)?;
    outcome.exit_code(&invocation.command)
}
