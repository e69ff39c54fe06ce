//! Static per-device configuration.
//!
//! The host hands the integration one configuration table per doorbell.
//! Validation happens once at startup; the resulting [`DeviceConfig`] is
//! immutable for the lifetime of the registered capabilities.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required configuration keys.
pub const CONF_ID: &str = "id";
pub const CONF_NAME: &str = "name";
pub const CONF_HOST: &str = "host";
pub const CONF_TOKEN: &str = "token";

/// Optional configuration keys.
pub const CONF_PORT: &str = "port";
pub const CONF_VERIFY_TLS: &str = "verify_tls";

pub const DEFAULT_NAME: &str = "Doorbell";
pub const DEFAULT_PORT: &str = "80";

/// How to reach and authenticate to one physical doorbell device.
///
/// Every capability adapter derives its request target and auth headers
/// from this record at construction time; nothing is re-resolved later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device id used to namespace the capability unique ids.
    pub id: String,
    /// Display name prefix for the registered capabilities.
    pub name: String,
    /// Hostname or IP of the doorbell on the local network.
    pub host: String,
    /// TCP port of the doorbell API, kept as a string like the host hands it over.
    #[serde(default = "default_port")]
    pub port: String,
    /// Pre-provisioned static bearer token for the doorbell API.
    pub token: String,
    /// Whether the host's image fetcher should verify TLS certificates when
    /// pulling the camera snapshot URL. Off by default: the doorbell sits on
    /// a trusted local network and serves no valid certificate.
    #[serde(default)]
    pub verify_tls: bool,
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

impl DeviceConfig {
    /// Validate a raw configuration table handed over by the host.
    ///
    /// Fails fast on the first missing required key or non-string value, so
    /// a bad configuration never produces a half-usable device record.
    pub fn from_value(raw: &Value) -> Result<Self> {
        let table = raw
            .as_object()
            .ok_or_else(|| BridgeError::MalformedConfig(value_kind(raw).to_string()))?;

        let require = |key: &'static str| -> Result<String> {
            match table.get(key) {
                None => Err(BridgeError::MissingConfigKey(key)),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(other) => Err(BridgeError::InvalidConfigValue {
                    key,
                    found: value_kind(other).to_string(),
                }),
            }
        };

        let port = match table.get(CONF_PORT) {
            None => default_port(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(BridgeError::InvalidConfigValue {
                    key: CONF_PORT,
                    found: value_kind(other).to_string(),
                });
            }
        };

        let verify_tls = match table.get(CONF_VERIFY_TLS) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(BridgeError::InvalidConfigValue {
                    key: CONF_VERIFY_TLS,
                    found: value_kind(other).to_string(),
                });
            }
        };

        Ok(Self {
            id: require(CONF_ID)?,
            name: require(CONF_NAME)?,
            host: require(CONF_HOST)?,
            port,
            token: require(CONF_TOKEN)?,
            verify_tls,
        })
    }

    /// Base URL of the doorbell API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Absolute URL for a device endpoint path such as `/opendoor`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
