use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Error, ProviderFailure, Result};

use super::types::Machine;

/// Provider used when none is configured.
pub const DEFAULT_PROVIDER: &str = "docker-machine";

/// Runs `<provider> inspect <name>` and turns its output into a [`Machine`].
#[derive(Debug, Clone)]
pub struct Inspector {
    program: String,
    args: Vec<String>,
    strict: bool,
}

impl Inspector {
    /// Build an inspector from a shell-style provider command line such as
    /// `docker-machine` or `sh ./fake-inspect.sh`.
    pub fn new(provider: &str) -> Result<Self> {
        let words = shell_words::split(provider).map_err(|e| Error::ProviderCommand {
            command: provider.to_string(),
            reason: e.to_string(),
        })?;
        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| Error::ProviderCommand {
            command: provider.to_string(),
            reason: "command is empty".to_string(),
        })?;
        Ok(Self {
            program,
            args: words.collect(),
            strict: false,
        })
    }

    /// Fail on an undecodable document instead of falling back to defaults.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Inspect `name`. Stdin and stderr stay attached to the terminal so the
    /// provider can prompt or report; stdout is captured in full.
    pub fn inspect(&self, name: &str) -> Result<Machine> {
        if name.is_empty() {
            return Err(Error::EmptyMachineName);
        }

        debug!(provider = %self.program, args = ?self.args, machine = name, "inspecting machine");
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(["inspect", name])
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| self.invocation_error(ProviderFailure::Spawn(e)))?;

        if !output.status.success() {
            return Err(self.invocation_error(ProviderFailure::Exit(output.status)));
        }

        match decode(&output.stdout) {
            Ok(machine) => {
                debug!(?machine, "decoded machine");
                Ok(machine)
            }
            Err(source) if self.strict => Err(Error::MalformedDescriptor {
                provider: self.program.clone(),
                source,
            }),
            Err(e) => {
                warn!(provider = %self.program, error = %e, "ignoring malformed machine description");
                Ok(Machine::default())
            }
        }
    }

    fn invocation_error(&self, cause: ProviderFailure) -> Error {
        Error::ProviderInvocation {
            provider: self.program.clone(),
            cause,
        }
    }
}

/// Decode a `docker-machine inspect` document. Only invalid JSON is an
/// error; missing, null or mistyped fields become empty strings / `false`.
pub fn decode(bytes: &[u8]) -> serde_json::Result<Machine> {
    let doc: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(Machine::from_document(&doc))
}
