/// Convenience result type used across listcomp.
pub type ListcompResult<T> = Result<T, ListcompError>;

/// Top-level error taxonomy used by compositor APIs.
///
/// The compositor itself raises none of these; they come from collaborators (draw operations,
/// context implementations) or from loading display lists.
#[derive(thiserror::Error, Debug)]
pub enum ListcompError {
    /// Invalid user-provided display-list data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A drawable's draw operation failed.
    #[error("draw error: {0}")]
    Draw(String),

    /// A rendering context was misused or could not service a call.
    #[error("context error: {0}")]
    Context(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ListcompError {
    /// Build a [`ListcompError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ListcompError::Draw`] value.
    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    /// Build a [`ListcompError::Context`] value.
    pub fn context(msg: impl Into<String>) -> Self {
        Self::Context(msg.into())
    }

    /// Build a [`ListcompError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
