use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoomError {
    #[error("inverse animation speed must be a finite number above zero, got {0}")]
    InvalidInverseSpeed(f64),

    #[error("animation accuracy must be a finite number above zero, got {0}")]
    InvalidAccuracy(f64),

    #[error("{name} must be finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("trigger selector must not be blank, got {0:?}")]
    InvalidTrigger(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("browser API error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, ZoomError>;
