//! Engine failure values.

use thiserror::Error;

/// Render an engine failure with its location, when one is attached.
fn format_transform_error(message: &str, location: &Option<ErrorLocation>) -> String {
    match location {
        Some(location) => format!(
            "{} ({}:{}:{})",
            message, location.file, location.line, location.column
        ),
        None => message.to_string(),
    }
}

/// Position a transform failure points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// File the engine was told it was transforming.
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// 0-based column.
    pub column: u32,
}

/// Failure returned by a transform engine.
///
/// Carries the engine's own diagnostic text; callers surface it unmodified.
/// Implements `PartialEq` so callers can assert which of two failures was
/// surfaced, which the loader's retry policy depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_transform_error(.message, .location))]
pub struct TransformError {
    /// Human-readable diagnostic text.
    pub message: String,
    /// Source position, when the engine reports one.
    pub location: Option<ErrorLocation>,
}

impl TransformError {
    /// A failure with diagnostic text and no location.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Attach the source position the failure points at.
    pub fn with_location(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.location = Some(ErrorLocation {
            file: file.into(),
            line,
            column,
        });
        self
    }

    /// True if the message indicates an unexpected-token condition.
    ///
    /// TSX sources that are really plain TypeScript fail this way when a
    /// generic-type expression is misread as JSX, which is what the loader's
    /// retry policy keys on.
    pub fn is_unexpected_token(&self) -> bool {
        self.message.contains("Unexpected")
    }
}

/// A module-type string no engine recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module type: '{0}'. Expected: js, jsx, ts, tsx")]
pub struct UnknownModuleType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_location() {
        let error = TransformError::new("Unexpected \">\"");
        assert_eq!(error.to_string(), "Unexpected \">\"");
    }

    #[test]
    fn test_display_with_location() {
        let error = TransformError::new("Unexpected \">\"").with_location("src/app.ts", 4, 17);
        assert_eq!(error.to_string(), "Unexpected \">\" (src/app.ts:4:17)");
    }

    #[test]
    fn test_is_unexpected_token() {
        assert!(TransformError::new("Unexpected \">\"").is_unexpected_token());
        assert!(TransformError::new("Unexpected end of file").is_unexpected_token());
        assert!(!TransformError::new("Could not resolve tsconfig").is_unexpected_token());
        // Case matters: the engines capitalize the word.
        assert!(!TransformError::new("unexpected token").is_unexpected_token());
    }

    #[test]
    fn test_equality_tracks_message_and_location() {
        let first = TransformError::new("Unexpected \">\"").with_location("a.ts", 1, 2);
        let second = TransformError::new("Unexpected \")\"").with_location("a.ts", 1, 2);
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
