use std::ffi::OsString;

use clap::Parser;

use crate::config::Config;
use crate::error::Result;
use crate::runner::CommandLine;

const AFTER_HELP: &str = "\
Arguments:
  COMMAND  the command to run (typically 'docker')
  ARGS     optional arguments to COMMAND";

#[derive(Debug, Parser)]
#[command(
    name = "with-docker-machine",
    version,
    about = "Run COMMAND in an environment defined by docker-machine.",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// docker machine name [default: from .wdmrc, else "default"]
    #[arg(long, value_name = "NAME")]
    pub machine: Option<String>,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

/// Everything one run needs, resolved from the command line and config.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub machine: String,
    pub provider: String,
    pub strict: bool,
    pub command: CommandLine,
}

impl Cli {
    /// Merge with `config`; command-line values win.
    pub fn into_invocation(self, config: Config) -> Result<Invocation> {
        Ok(Invocation {
            machine: self.machine.unwrap_or(config.machine),
            provider: config.provider,
            strict: config.strict,
            command: CommandLine::new(self.command)?,
        })
    }
}
