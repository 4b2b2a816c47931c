use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Random range is inverted: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PulseError>;
