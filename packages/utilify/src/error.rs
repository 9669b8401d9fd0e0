//! Error types for the array helpers.

use crate::encode::Format;

/// Errors raised by the array helpers.
///
/// Pattern errors always propagate to the caller. Encoding errors only
/// surface through the `try_*` encoders; the plain encoders degrade instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The pattern failed to compile (or carried an unknown delimiter flag).
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The pattern compiled but the matcher failed while evaluating it.
    #[error("failed to evaluate pattern {pattern:?}: {message}")]
    PatternEvaluation { pattern: String, message: String },

    /// Encoding a value to text failed.
    #[error("encode error ({format}): {message}")]
    Encode { format: Format, message: String },
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, message: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn encode(format: Format, message: impl Into<String>) -> Self {
        Error::Encode {
            format,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display() {
        let e = Error::invalid_pattern("[abc", "unclosed character class");
        let display = format!("{}", e);
        assert!(display.contains("invalid pattern"));
        assert!(display.contains("[abc"));
        assert!(display.contains("unclosed character class"));
    }

    #[test]
    fn pattern_evaluation_display() {
        let e = Error::PatternEvaluation {
            pattern: "^a".to_string(),
            message: "backtrack limit".to_string(),
        };
        assert!(format!("{}", e).contains("failed to evaluate pattern"));
    }

    #[test]
    fn encode_error_display() {
        let e = Error::encode(Format::YAML, "depth exceeded");
        let display = format!("{}", e);
        assert!(display.contains("encode error"));
        assert!(display.contains("yaml"));
        assert!(display.contains("depth exceeded"));
    }
}
