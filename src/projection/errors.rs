//! Custom error types for CRS and bounds processing

use std::fmt;
use std::io;

/// Error types for projection and bounds operations
#[derive(Debug)]
pub enum ProjkitError {
    /// I/O error
    IoError(io::Error),
    /// Argument is not of an acceptable kind
    TypeError(String),
    /// Numeric argument outside its valid interval
    OutOfRange(String),
    /// Argument outside its valid domain or of the wrong shape
    InvalidArgument(String),
    /// A CRS or UTM zone could not be constructed
    CrsError(String),
    /// Error raised by the PROJ engine
    ProjectionError(String),
    /// A merge produced no area
    EmptyGeometry(String),
    /// Invalid configuration
    ConfigError(String),
}

impl fmt::Display for ProjkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjkitError::IoError(e) => write!(f, "I/O error: {}", e),
            ProjkitError::TypeError(msg) => write!(f, "Type error: {}", msg),
            ProjkitError::OutOfRange(msg) => write!(f, "Value out of range: {}", msg),
            ProjkitError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ProjkitError::CrsError(msg) => write!(f, "CRS error: {}", msg),
            ProjkitError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            ProjkitError::EmptyGeometry(msg) => write!(f, "Empty geometry: {}", msg),
            ProjkitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProjkitError {}

impl From<io::Error> for ProjkitError {
    fn from(error: io::Error) -> Self {
        ProjkitError::IoError(error)
    }
}

impl From<proj::ProjCreateError> for ProjkitError {
    fn from(error: proj::ProjCreateError) -> Self {
        ProjkitError::ProjectionError(error.to_string())
    }
}

impl From<proj::ProjError> for ProjkitError {
    fn from(error: proj::ProjError) -> Self {
        ProjkitError::ProjectionError(error.to_string())
    }
}

/// Result type for projection operations
pub type ProjkitResult<T> = Result<T, ProjkitError>;
