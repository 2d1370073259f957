//! Shared utilities for command handlers

use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use serde_json::Value;
use std::path::Path;
use tracing::debug;
use wp2vercel_core::{parse_json_slice, SourceDocument};

/// An export read from disk, kept both raw and decoded
#[derive(Debug)]
pub struct LoadedExport {
    pub raw: Value,
    pub source: SourceDocument,
}

/// Read, parse and schema-check a Redirection export
///
/// Parse failures and schema failures surface as distinct core errors.
pub async fn load_export(path: &Path) -> Result<LoadedExport> {
    let _timer = Timer::with_details("export_loading", &path.display().to_string());

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = tokio::fs::read(path).await?;
    debug!(bytes = content.len(), "Export file read");

    let raw = parse_json_slice(&content)?;
    let source = SourceDocument::from_value(raw.clone())?;
    debug!(rules = source.redirects.len(), "Export decoded");

    Ok(LoadedExport { raw, source })
}
