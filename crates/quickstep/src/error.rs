//! Error types shared by the loader and the minify plugin.

use miette::Diagnostic;
use quickstep_engine::TransformError;
use thiserror::Error;

/// Errors raised by the quickstep loader and minify plugin.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The compiler carries no transform engine.
    ///
    /// Both the loader and the minify plugin raise this with the same text,
    /// before any transform is attempted.
    #[error("[quickstep] you need to install the transform engine on the compiler first")]
    #[diagnostic(
        code(quickstep::missing_engine),
        help("Call Compiler::set_engine with your transform engine before running a build")
    )]
    MissingEngine,

    /// The engine rejected a transform request.
    ///
    /// The engine's own diagnostic text (message, file, line, column)
    /// passes through unmodified.
    #[error(transparent)]
    #[diagnostic(code(quickstep::transform))]
    Transform(#[from] TransformError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_engine_message_names_the_fix() {
        let message = Error::MissingEngine.to_string();
        assert!(message.starts_with("[quickstep]"));
        assert!(message.contains("install the transform engine"));
    }

    #[test]
    fn test_transform_error_text_passes_through() {
        let inner = TransformError::new("Unexpected token").with_location("src/app.tsx", 3, 14);
        let expected = inner.to_string();
        let wrapped = Error::from(inner);
        assert_eq!(wrapped.to_string(), expected);
    }
}
