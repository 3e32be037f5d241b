use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid color '{value}' for action '{action}'")]
    InvalidColor { action: String, value: String },
    #[error("Duplicate action name: {0}")]
    DuplicateAction(String),
    #[error("Action name must not be empty")]
    EmptyName,
    #[error("No config directory available on this platform")]
    NoConfigDir,
}
