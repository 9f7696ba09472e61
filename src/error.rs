use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use crate::runner::Abnormal;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("machine name must not be empty")]
    EmptyMachineName,

    #[error("invalid provider command {command:?}: {reason}")]
    ProviderCommand { command: String, reason: String },

    #[error("failed to inspect machine with `{provider}`")]
    ProviderInvocation {
        provider: String,
        #[source]
        cause: ProviderFailure,
    },

    #[error("`{provider}` returned a malformed machine description")]
    MalformedDescriptor {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no command given")]
    EmptyCommand,

    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for `{command}`")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` terminated abnormally: {cause}")]
    AbnormalTermination { command: String, cause: Abnormal },
}

/// Why the inspection provider did not produce a document.
#[derive(Debug, Error)]
pub enum ProviderFailure {
    #[error("could not start provider")]
    Spawn(#[source] io::Error),

    #[error("provider {0}")]
    Exit(ExitStatus),
}
