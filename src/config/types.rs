use serde::Deserialize;

use crate::machine::DEFAULT_PROVIDER;

/// Machine inspected when neither the command line nor the config names one.
pub const DEFAULT_MACHINE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Machine to inspect unless `--machine` is given.
    pub machine: String,
    /// Inspection provider command line, split shell-style.
    pub provider: String,
    /// Fail on a malformed provider document instead of using defaults.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            machine: DEFAULT_MACHINE.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.machine, "default");
        assert_eq!(cfg.provider, "docker-machine");
        assert!(!cfg.strict);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg: Config = serde_yaml::from_str("machine: staging\n").unwrap();
        assert_eq!(cfg.machine, "staging");
        assert_eq!(cfg.provider, DEFAULT_PROVIDER);
    }

    #[test]
    fn full_document() {
        let yaml = "machine: dev\nprovider: /opt/bin/docker-machine --native-ssh\nstrict: true\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg,
            Config {
                machine: "dev".into(),
                provider: "/opt/bin/docker-machine --native-ssh".into(),
                strict: true,
            }
        );
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_yaml::from_str::<Config>("strict: sometimes\n").is_err());
    }
}
