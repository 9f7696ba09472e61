use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::types::Config;

/// Name of the per-directory config file.
pub const CONFIG_FILE: &str = ".wdmrc";

/// Load config from a `.wdmrc` file in the given directory, or defaults if
/// there is none.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    // An empty file is a valid, empty config.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "\n").unwrap();
        assert_eq!(load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "machine: prod\nstrict: true\n").unwrap();
        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.machine, "prod");
        assert!(cfg.strict);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "machine: [unclosed\n").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
