//! Error types for tierprice
//!
//! The pricing core never fails; these errors come from configuration
//! loading and command-line parsing.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// tierprice errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid tier code: {0}")]
    InvalidCode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::InvalidPrice("abc".into()).to_string(),
            "Invalid price: abc"
        );
        assert_eq!(Error::from("plain").to_string(), "plain");
        assert_eq!(
            Error::from(String::from("owned")).to_string(),
            "owned"
        );
    }
}
