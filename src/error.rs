use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum BridgeError {
    #[error("Missing required config key: {0}")]
    MissingConfigKey(&'static str),

    #[error("Config key {key} must be a string, got {found}")]
    InvalidConfigValue { key: &'static str, found: String },

    #[error("Device configuration must be a table of keys and values, got {0}")]
    MalformedConfig(String),

    #[error("API token is not usable as an HTTP header value")]
    InvalidToken,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl BridgeError {
    /// True for errors that make the integration refuse to start.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BridgeError::MissingConfigKey(_)
                | BridgeError::InvalidConfigValue { .. }
                | BridgeError::MalformedConfig(_)
                | BridgeError::InvalidToken
        )
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
