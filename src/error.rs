//! Central error handling for waveforge scene construction
//!
//! Provides a unified SceneError enum with consistent categorization
//! across the builder modules.

/// Centralized error type for all scene-building operations
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Object error: {0}")]
    Object(String),

    #[error("Shape key error: {0}")]
    ShapeKey(String),
}

impl SceneError {
    /// Convenience constructors for common error types
    pub fn config<T: ToString>(msg: T) -> Self {
        SceneError::Config(msg.to_string())
    }

    pub fn object<T: ToString>(msg: T) -> Self {
        SceneError::Object(msg.to_string())
    }

    pub fn shape_key<T: ToString>(msg: T) -> Self {
        SceneError::ShapeKey(msg.to_string())
    }
}

/// Result type alias for scene-building operations
pub type SceneResult<T> = Result<T, SceneError>;
