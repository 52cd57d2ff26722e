//! Error types for surface acquisition and configuration

use thiserror::Error;

/// Failure to bind an effect to its drawing surface.
///
/// Never fatal: the page skips the affected component and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("drawing surface `{id}` not found")]
    Missing { id: String },
    #[error("element `{id}` is not a canvas")]
    NotACanvas { id: String },
    #[error("canvas `{id}` has no 2d context")]
    NoContext { id: String },
}

impl SurfaceError {
    pub fn missing(id: &str) -> Self {
        Self::Missing { id: id.to_string() }
    }

    /// Identifier of the surface that could not be bound
    pub fn id(&self) -> &str {
        match self {
            Self::Missing { id } | Self::NotACanvas { id } | Self::NoContext { id } => id,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
