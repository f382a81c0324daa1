use std::error::Error;

/// Base trait for all application errors
pub trait NodeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the environment
    fn is_user_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("probe failed")]
    struct ProbeError;

    impl NodeError for ProbeError {
        fn error_code(&self) -> &'static str {
            "PROBE_FAILED"
        }
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let err: Box<dyn NodeError> = Box::new(ProbeError);
        assert_eq!(err.error_code(), "PROBE_FAILED");
        assert_eq!(err.to_string(), "probe failed");
    }

    #[test]
    fn test_default_is_not_user_error() {
        assert!(!ProbeError.is_user_error());
    }
}
