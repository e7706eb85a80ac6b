use thiserror::Error;

/// Failures detected while validating startup configuration.
///
/// Missing DOM elements are not represented here; components skip them.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("palette entry `{key}` has malformed hex color `{hex}`")]
    MalformedHex { key: &'static str, hex: &'static str },

    #[error("palette entry `{key}`: hex `{hex}` does not match rgb triplet `{rgb}`")]
    RgbMismatch {
        key: &'static str,
        hex: &'static str,
        rgb: String,
    },

    #[error("reveal threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("mobile breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f64),

    #[error("default color `{0}` is not in the palette")]
    UnknownDefaultColor(String),

    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("malformed page config: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
