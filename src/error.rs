use thiserror::Error;

/// Errors raised by the decision component.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Speed out of range: {speed} km/h is outside [{min}, {max}]")]
    SpeedOutOfRange { speed: i32, min: u32, max: u32 },

    #[error("Invalid traffic signal: {value:?}")]
    InvalidSignal { value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Inconsistent vehicle snapshot: {0}")]
    InvalidSnapshot(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
