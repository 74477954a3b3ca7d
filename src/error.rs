use thiserror::Error;

/// Errors that can occur while building recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A constructor was given an argument it cannot accept, such as an empty name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Rejects empty or whitespace-only names.
pub(crate) fn require_name(kind: &str, name: String) -> Result<String, RecipeError> {
    if name.trim().is_empty() {
        return Err(RecipeError::InvalidArgument(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(name)
}
