use crate::machine::Machine;

pub const TLS_VERIFY: &str = "DOCKER_TLS_VERIFY";
pub const HOST: &str = "DOCKER_HOST";
pub const CERT_PATH: &str = "DOCKER_CERT_PATH";
pub const MACHINE_NAME: &str = "DOCKER_MACHINE_NAME";

/// Port the docker engine listens on inside a docker machine.
pub const ENGINE_PORT: u16 = 2376;

/// Ordered set of environment assignments. Keys are unique; setting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: Vec<(String, String)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.vars.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Build the environment a docker client needs to talk to `machine`.
pub fn machine_env(machine: &Machine) -> Environment {
    let verify = if machine.tls_verify() { "1" } else { "0" };

    let mut env = Environment::new();
    env.set(TLS_VERIFY, verify);
    env.set(HOST, format!("{}:{ENGINE_PORT}", machine.ip_address()));
    env.set(CERT_PATH, machine.cert_path());
    env.set(MACHINE_NAME, machine.name());
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Machine {
        Machine::new("192.168.99.100", "dev", "/certs/dev", true)
    }

    #[test]
    fn projects_all_four_variables_in_order() {
        let env = machine_env(&sample());
        let pairs: Vec<_> = env.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("DOCKER_TLS_VERIFY", "1"),
                ("DOCKER_HOST", "192.168.99.100:2376"),
                ("DOCKER_CERT_PATH", "/certs/dev"),
                ("DOCKER_MACHINE_NAME", "dev"),
            ]
        );
    }

    #[test]
    fn verify_flag_off() {
        let env = machine_env(&Machine::new("10.0.0.2", "x", "", false));
        assert_eq!(env.get(TLS_VERIFY), Some("0"));
    }

    #[test]
    fn empty_machine_still_gets_port() {
        let env = machine_env(&Machine::default());
        assert_eq!(env.get(HOST), Some(":2376"));
        assert_eq!(env.get(CERT_PATH), Some(""));
        assert_eq!(env.get(MACHINE_NAME), Some(""));
        assert_eq!(env.get(TLS_VERIFY), Some("0"));
    }

    #[test]
    fn host_is_not_reformatted() {
        let env = machine_env(&Machine::new("fe80::1", "v6", "", true));
        assert_eq!(env.get(HOST), Some("fe80::1:2376"));
    }

    #[test]
    fn projection_is_deterministic() {
        let machine = sample();
        assert_eq!(machine_env(&machine), machine_env(&machine));
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut env = Environment::new();
        env.set("A", "1");
        env.set("B", "2");
        env.set("A", "3");
        assert_eq!(env.len(), 2);
        assert_eq!(env.iter().collect::<Vec<_>>(), vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn get_missing_key() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.get(HOST), None);
    }
}
