//! Error kinds reported by the update pipeline.

/// Failure categories surfaced to the user.
///
/// Functions in this crate return `anyhow::Result` and raise these values through
/// `anyhow::Error::from`, so callers can tell the kinds apart with `downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The AGP version string does not have the expected shape
    Format(String),
    /// Transport failure, timeout or non-success HTTP status
    Network(String),
    /// An expected pattern is missing from a fetched page
    NotFound(String),
    /// The properties file could not be written
    Io(String),
}

impl std::fmt::Display for UpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::Format(msg) => write!(f, "Invalid AGP version: {}", msg),
            UpdateError::Network(msg) => write!(f, "Network error: {}", msg),
            UpdateError::NotFound(msg) => {
                write!(
                    f,
                    "Not found: {}. The release may not be published yet, or the archive layout changed.",
                    msg
                )
            }
            UpdateError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateError {}

/// Returns the [`UpdateError`] carried by an `anyhow::Error`, if any.
pub fn kind_of(error: &anyhow::Error) -> Option<&UpdateError> {
    error.downcast_ref::<UpdateError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_display() {
        let err = UpdateError::Format("3.4.0-beta".to_string());
        assert_eq!(err.to_string(), "Invalid AGP version: 3.4.0-beta");

        let err = UpdateError::Network("timed out".to_string());
        assert_eq!(err.to_string(), "Network error: timed out");

        let err = UpdateError::NotFound("iframe".to_string());
        assert!(err.to_string().starts_with("Not found: iframe."));

        let err = UpdateError::Io("permission denied".to_string());
        assert_eq!(err.to_string(), "I/O error: permission denied");
    }

    #[test]
    fn test_kind_of_downcasts_through_anyhow() {
        let err = anyhow::Error::from(UpdateError::NotFound("x".to_string()));
        assert_eq!(kind_of(&err), Some(&UpdateError::NotFound("x".to_string())));

        let err = anyhow::anyhow!("plain error");
        assert_eq!(kind_of(&err), None);
    }

    #[test]
    fn test_kind_of_survives_context() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(anyhow::Error::from(UpdateError::Io("disk full".to_string())));
        let err = result.context("Failed to update").unwrap_err();
        assert!(matches!(kind_of(&err), Some(UpdateError::Io(_))));
    }
}
