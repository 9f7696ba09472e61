use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::ExitStatus;

use crate::error::{Error, Result};

/// A command name followed by its arguments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().ok_or(Error::EmptyCommand)?;
        if program.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self {
            program,
            args: argv.collect(),
        })
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program name for messages.
    pub fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normal exit with the given code (zero or not).
    Exited(i32),
    /// Anything that was not a normal exit.
    Abnormal(Abnormal),
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Outcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Outcome::Abnormal(Abnormal::Signaled {
                    signal,
                    core_dumped: status.core_dumped(),
                });
            }
        }

        Outcome::Abnormal(Abnormal::Other(status))
    }

    /// The code to exit with, or an error when the child did not exit
    /// normally. Signals are never turned into exit codes.
    pub fn exit_code(self, command: &CommandLine) -> Result<i32> {
        match self {
            Outcome::Exited(code) => Ok(code),
            Outcome::Abnormal(cause) => Err(Error::AbnormalTermination {
                command: command.display_name(),
                cause,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abnormal {
    Signaled { signal: i32, core_dumped: bool },
    Other(ExitStatus),
}

impl fmt::Display for Abnormal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abnormal::Signaled {
                signal,
                core_dumped,
            } => {
                write!(f, "killed by signal {signal}")?;
                if let Some(name) = signal_name(*signal) {
                    write!(f, " ({name})")?;
                }
                if *core_dumped {
                    f.write_str(" (core dumped)")?;
                }
                Ok(())
            }
            Abnormal::Other(status) => write!(f, "{status}"),
        }
    }
}

#[cfg(unix)]
fn signal_name(signal: i32) -> Option<&'static str> {
    let name = match signal {
        libc::SIGHUP => "SIGHUP",
        libc::SIGINT => "SIGINT",
        libc::SIGQUIT => "SIGQUIT",
        libc::SIGILL => "SIGILL",
        libc::SIGABRT => "SIGABRT",
        libc::SIGBUS => "SIGBUS",
        libc::SIGFPE => "SIGFPE",
        libc::SIGKILL => "SIGKILL",
        libc::SIGSEGV => "SIGSEGV",
        libc::SIGPIPE => "SIGPIPE",
        libc::SIGALRM => "SIGALRM",
        libc::SIGTERM => "SIGTERM",
        libc::SIGUSR1 => "SIGUSR1",
        libc::SIGUSR2 => "SIGUSR2",
        _ => return None,
    };
    Some(name)
}

#[cfg(not(unix))]
fn signal_name(_signal: i32) -> Option<&'static str> {
    None
}
