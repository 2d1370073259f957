//! Preview command handler

use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use wp2vercel_core::{convert_with_report, ConversionReport, TargetDocument};

use super::utils::load_export;

/// Everything `preview` shows, for machine output formats
#[derive(Debug, Serialize)]
struct PreviewOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a Value>,
    vercel: &'a TargetDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ConversionReport>,
}

/// Handle the preview command
#[instrument(skip(_config, output), fields(file = %args.export.display()))]
pub async fn handle_preview(
    args: PreviewArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("preview_command", &format!("file: {}", args.export.display()));
    info!("Starting preview");

    let export = load_export(&args.export).await?;
    let (document, report) = convert_with_report(&export.source);

    if !output.is_human() {
        return output.data(&PreviewOutput {
            source: args.show_source.then_some(&export.raw),
            vercel: &document,
            report: args.show_report.then_some(&report),
        });
    }

    output.info(&format!("Previewing {}", args.export.display()))?;

    if args.show_source {
        output.section("Imported Export")?;
        output.data(&export.raw)?;
    }

    output.section("Vercel Redirects")?;
    output.rules(&document)?;

    if args.show_report {
        output.section("Conversion Report")?;
        output.report(&report)?;
    } else if report.has_fallbacks() {
        output.warning(&format!(
            "⚠ {} path(s) fall back to \"/\" (use --show-report for details)",
            report.fallbacks.len()
        ))?;
    }

    Ok(())
}
