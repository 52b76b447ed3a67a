use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    /// No pattern in the expected set matched the remaining input. The
    /// message carries the expectation list verbatim; callers surface it
    /// as-is.
    #[error("syntax error in [{remainder}], expected one of: {expected}")]
    Syntax { remainder: String, expected: String },

    #[error("Unsupported filter function: {0}")]
    UnsupportedFilterFunction(String),

    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    #[error("unexpected closing parenthesis")]
    UnexpectedClosingParenthesis,

    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression,

    #[error("remaining tokens after building the filter tree: {0}")]
    RemainingTokens(String),

    #[error("expected a property, got {0}")]
    ExpectedProperty(String),

    #[error("expected a value, got {0}")]
    ExpectedValue(String),

    #[error("expected a geometry, got {0}")]
    ExpectedGeometry(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid time period: {0}")]
    InvalidTimePeriod(String),

    #[error("token cannot appear in postfix position: {0}")]
    UnexpectedPostfixToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_syntax_lists_expectations() {
        let err = ParseError::Syntax {
            remainder: "= 1".to_string(),
            expected: "PROPERTY, LPAREN".to_string(),
        };
        assert!(err.to_string().contains("expected one of: PROPERTY, LPAREN"));
    }

    #[test]
    fn test_parse_error_unsupported_filter_function_message() {
        let err = ParseError::UnsupportedFilterFunction("myFunc".to_string());
        assert_eq!(err.to_string(), "Unsupported filter function: myFunc");
    }

    #[test]
    fn test_parse_error_eq() {
        let err1 = ParseError::InvalidNumber("1.2.3".to_string());
        let err2 = ParseError::InvalidNumber("1.2.3".to_string());
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_parse_error_clone() {
        let err = ParseError::UnclosedParenthesis;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
