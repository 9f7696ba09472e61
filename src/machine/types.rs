use serde_json::Value;

/// Resolved connection details for one docker machine.
///
/// Built once from a provider document (or [`Machine::new`]) and never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Machine {
    ip_address: String,
    name: String,
    cert_path: String,
    tls_verify: bool,
}

impl Machine {
    pub fn new(
        ip_address: impl Into<String>,
        name: impl Into<String>,
        cert_path: impl Into<String>,
        tls_verify: bool,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            name: name.into(),
            cert_path: cert_path.into(),
            tls_verify,
        }
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cert_path(&self) -> &str {
        &self.cert_path
    }

    pub fn tls_verify(&self) -> bool {
        self.tls_verify
    }

    /// Pick the connection fields out of a `docker-machine inspect` document.
    ///
    /// Each field is read on its own: a missing key, a null or a value of the
    /// wrong type leaves that field at its default and keeps the rest.
    pub(crate) fn from_document(doc: &Value) -> Self {
        let driver = member(Some(doc), "Driver");
        let host_options = member(Some(doc), "HostOptions");
        let auth_options = member(host_options, "AuthOptions");
        let engine_options = member(host_options, "EngineOptions");

        Self {
            // docker-machine emits `IPAddress`.
            ip_address: string_member(driver, "IPAddress"),
            name: string_member(driver, "MachineName"),
            cert_path: string_member(auth_options, "StorePath"),
            tls_verify: member(engine_options, "TlsVerify")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

/// Look up `key` in an object, preferring an exact match and falling back to
/// a case-insensitive one.
fn member<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    let object = value?.as_object()?;
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn string_member(value: Option<&Value>, key: &str) -> String {
    member(value, key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
