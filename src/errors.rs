use thiserror::Error;

/// Failures the countdown engine reports instead of guessing.
///
/// Missing input and elapsed time are not errors: they surface as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("Invalid end instant {input:?}: {reason}")]
    InvalidEndInstant { input: String, reason: String },
}

impl CountdownError {
    pub fn invalid_end(input: &str, reason: impl Into<String>) -> Self {
        CountdownError::InvalidEndInstant {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
