//! wp2vercel Core - conversion engine for WordPress redirect exports
//!
//! This crate turns the JSON export of the WordPress Redirection plugin into
//! the `redirects` section of a `vercel.json`.
//!
//! # Main Components
//!
//! - **Error Handling**: `Parse` and `Schema` failures kept distinct via `thiserror`
//! - **Core Types**: source and target rule schemas
//! - **Conversion**: position-preserving rule mapping with `/` fallbacks
//! - **Reporting**: which rules received a fallback path
//!
//! # Example
//!
//! ```
//! use wp2vercel_core::{convert_str, render, Result};
//!
//! fn example() -> Result<()> {
//!     let export = r#"{"redirects": [{"match_url": "/old", "action_code": 301, "action_data": {"url": "/new"}}]}"#;
//!     let document = convert_str(export)?;
//!     assert!(document.redirects[0].permanent);
//!     print!("{}", render(&document)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod convert;
pub mod document;
pub mod error;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use convert::{convert, convert_str, convert_value, convert_with_report};
pub use document::{parse_json, parse_json_slice, parse_source, render, render_pretty, CONTENT_TYPE, OUTPUT_FILE_NAME};
pub use error::{Error, ErrorKind, Result};
pub use report::{ConversionReport, Fallback, FallbackField, FallbackReason};
pub use types::{
    ActionData, SourceDocument, SourceRule, TargetDocument, TargetRule, FALLBACK_PATH,
    PERMANENT_ACTION_CODE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(OUTPUT_FILE_NAME, "vercel.json");
        assert_eq!(CONTENT_TYPE, "application/json");
    }
}
