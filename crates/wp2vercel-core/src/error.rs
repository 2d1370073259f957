//! Error types for the wp2vercel core library
//!
//! Conversion can fail in exactly two ways on the input side: the text is
//! not JSON at all (`Parse`), or it is JSON without the shape of a
//! Redirection export (`Schema`). The two are kept apart so callers can
//! present different diagnostics.

use std::fmt;
use thiserror::Error;

/// Main error type for wp2vercel operations
#[derive(Error, Debug)]
pub enum Error {
    /// Raw input is not well-formed JSON
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Input is JSON but does not match the export schema
    #[error("Schema error at {path}: {message}")]
    Schema {
        /// JSON path of the offending element, e.g. `$.redirects`
        path: String,
        message: String,
    },

    /// The target document could not be serialized
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Schema,
    Render,
}

impl Error {
    /// Build a parse error from a serde_json syntax failure
    pub fn parse(source: serde_json::Error) -> Self {
        Error::Parse {
            message: source.to_string(),
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    /// Build a schema error for the element at `path`
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Which kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Schema { .. } => ErrorKind::Schema,
            Error::Render { .. } => ErrorKind::Render,
        }
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    pub fn is_schema(&self) -> bool {
        self.kind() == ErrorKind::Schema
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Schema => write!(f, "schema"),
            ErrorKind::Render => write!(f, "render"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = Error::schema("$.redirects", "missing required field `redirects`");
        assert_eq!(
            err.to_string(),
            "Schema error at $.redirects: missing required field `redirects`"
        );
        assert!(err.is_schema());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_parse_error_carries_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ]").unwrap_err();
        let err = Error::parse(source);

        match &err {
            Error::Parse { line, column, .. } => {
                assert_eq!(*line, 2);
                assert!(*column > 0);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Parse error at line 2"));
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Parse.to_string(), "parse");
        assert_eq!(ErrorKind::Schema.to_string(), "schema");
        assert_eq!(ErrorKind::Render.to_string(), "render");
    }
}
