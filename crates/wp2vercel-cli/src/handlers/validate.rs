//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use tracing::{info, instrument};
use wp2vercel_core::convert_with_report;

use super::utils::load_export;

/// Machine-readable validation outcome
#[derive(Debug, Serialize)]
struct ValidationSummary {
    valid: bool,
    rules: usize,
    permanent: usize,
    fallbacks: usize,
}

/// Handle the validate command
///
/// Parse and schema failures propagate as errors; a valid export prints a
/// short summary.
#[instrument(skip(_config, output), fields(file = %args.export.display()))]
pub async fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.export.display()));
    info!("Starting validation process");
    output.info(&format!("Validating export: {}", args.export.display()))?;

    let export = load_export(&args.export).await?;
    let (_, report) = convert_with_report(&export.source);

    info!(rules = report.total, "Validation completed successfully");

    if !output.is_human() {
        return output.data(&ValidationSummary {
            valid: true,
            rules: report.total,
            permanent: report.permanent,
            fallbacks: report.fallbacks.len(),
        });
    }

    output.success(&format!(
        "✓ {} is a valid Redirection export with {} rule(s)",
        args.export.display(),
        report.total
    ))?;

    if report.has_fallbacks() {
        output.warning(&format!(
            "⚠ {} path(s) are missing or empty and would become \"/\"",
            report.fallbacks.len()
        ))?;
    }

    Ok(())
}
