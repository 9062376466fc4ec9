/// Convenience result type used across Framewall.
pub type FramewallResult<T> = Result<T, FramewallError>;

/// Top-level error taxonomy used by the visualizer core.
///
/// Ordinary user-driven sequences never produce an error: stale frame ids
/// are tolerated as no-ops and out-of-range input is clamped. Errors only
/// surface at explicit boundaries (composition validation, style-identifier
/// parsing, JSON handoff).
#[derive(thiserror::Error, Debug)]
pub enum FramewallError {
    /// Invalid composition data (duplicate ids, non-finite transforms).
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame-style identifier that is not part of the catalog reached the
    /// core. This can only arise from an internal defect, never from user
    /// gestures.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Errors when serializing or deserializing a composition.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramewallError {
    /// Build a [`FramewallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramewallError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`FramewallError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
