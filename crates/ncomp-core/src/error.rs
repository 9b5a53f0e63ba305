//! Error taxonomy for component scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a component from being created
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Bad component name, unsupported file type, or inconsistent request
    #[error("{0}")]
    InvalidInput(String),

    /// A component with the same name already exists in the target directory
    #[error(
        "A component with name '{file}' already exists. Please choose a different name and file type."
    )]
    NameCollision { file: String, path: PathBuf },

    /// No template registered for the request, or a custom template is missing
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Directory creation, read, or write failed
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Wrap an I/O error with a short description of what was being attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the user should be shown usage help alongside this error
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
