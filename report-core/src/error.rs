use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("request for '{path}' failed: {message}")]
    Network { path: String, message: String },

    #[error("'{path}' responded with status {status}")]
    Status { path: String, status: u16 },

    #[error("could not decode '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("invalid site config: {0}")]
    Config(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{0} is required")]
    Validation(&'static str),
}

impl SiteError {
    pub fn network(path: &str, message: impl Into<String>) -> Self {
        Self::Network {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn decode(path: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
