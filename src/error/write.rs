use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum WriteError {
    #[error("Unsupported filter function: {0}")]
    UnsupportedFilterFunction(String),

    #[error("NOT filter must wrap exactly one child, got {0}")]
    InvalidNotArity(usize),

    #[error("collapsed {0} filter must be uncollapsed before writing")]
    CollapsedNot(String),

    #[error("DWITHIN filter is missing a distance")]
    MissingDistance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_unsupported_filter_function_message() {
        let err = WriteError::UnsupportedFilterFunction("myFunc".to_string());
        assert_eq!(err.to_string(), "Unsupported filter function: myFunc");
    }

    #[test]
    fn test_write_error_invalid_not_arity() {
        let err = WriteError::InvalidNotArity(2);
        assert!(err.to_string().contains("exactly one child"));
    }

    #[test]
    fn test_write_error_eq() {
        assert_eq!(WriteError::MissingDistance, WriteError::MissingDistance);
    }
}
