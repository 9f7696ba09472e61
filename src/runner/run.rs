use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::env::Environment;
use crate::error::{Error, Result};

use super::types::{CommandLine, Outcome};

/// Run `cmd` with exactly `env` as its environment and wait for it.
///
/// Nothing from the parent environment is inherited. The program is looked
/// up in the parent's `PATH`, because the child's environment has none.
/// Standard streams are shared with the parent.
pub fn run(cmd: &CommandLine, env: &Environment) -> Result<Outcome> {
    let program = resolve_program(cmd.program(), std::env::var_os("PATH").as_deref());
    debug!(program = %program.display(), args = ?cmd.args(), "running command");

    let mut child = Command::new(&program)
        .args(cmd.args())
        .env_clear()
        .envs(env.iter())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Spawn {
            command: cmd.display_name(),
            source,
        })?;

    let status = child.wait().map_err(|source| Error::Wait {
        command: cmd.display_name(),
        source,
    })?;

    let outcome = Outcome::from_status(status);
    debug!(?outcome, "command finished");
    Ok(outcome)
}

/// Find `program` in `search_paths` when it is a bare name. Names containing
/// a path separator, and names not found, are returned unchanged.
fn resolve_program(program: &OsStr, search_paths: Option<&OsStr>) -> PathBuf {
    let path = Path::new(program);
    if program.to_string_lossy().contains(std::path::is_separator) {
        return path.to_path_buf();
    }

    search_paths
        .and_then(|paths| find_in_path(paths, program))
        .unwrap_or_else(|| path.to_path_buf())
}

fn find_in_path(search_paths: &OsStr, program: &OsStr) -> Option<PathBuf> {
    // Empty entries would mean the current directory; they are skipped.
    std::env::split_paths(search_paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
