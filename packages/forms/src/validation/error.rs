use thiserror::Error;

/// Structural problems with form input. Failed rules are never reported
/// through this type; they end up in [`FieldErrors`](super::FieldErrors).
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form values must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
