//! Convert command handler

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};
use wp2vercel_core::{convert_with_report, render, ConversionReport};

use super::utils::load_export;

/// Machine-readable result of a conversion written to disk
#[derive(Debug, Serialize)]
struct ConvertSummary<'a> {
    output: PathBuf,
    report: &'a ConversionReport,
}

/// Handle the convert command
#[instrument(skip(config, output), fields(file = %args.export.display()))]
pub async fn handle_convert(
    args: ConvertArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("convert_command", &format!("file: {}", args.export.display()));
    info!("Starting conversion");

    let export = load_export(&args.export).await?;
    let (document, report) = convert_with_report(&export.source);
    let rendered = render(&document)?;

    if report.has_fallbacks() {
        warn!(fallbacks = report.fallbacks.len(), "Some rules fell back to \"/\"");
    }

    if args.stdout {
        return output.write(&rendered);
    }

    let destination = args
        .save_to
        .clone()
        .unwrap_or_else(|| config.output.default_path());

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let overwrite = args.force || config.output.overwrite;
    write_output(&destination, rendered.as_bytes(), overwrite).await?;
    info!(output = %destination.display(), rules = document.len(), "vercel.json written");

    if !output.is_human() {
        return output.data(&ConvertSummary {
            output: destination,
            report: &report,
        });
    }

    output.success(&format!(
        "✓ Converted {} rule(s) to {}",
        document.len(),
        destination.display()
    ))?;
    output.debug(&format!(
        "{} permanent, {} temporary",
        report.permanent, report.temporary
    ))?;

    if args.report {
        output.section("Conversion Report")?;
        output.report(&report)?;
    } else if report.has_fallbacks() {
        output.warning(&format!(
            "⚠ {} path(s) were missing or empty and now point to \"/\" (use --report for details)",
            report.fallbacks.len()
        ))?;
    }

    Ok(())
}

/// Write the rendered document; without `overwrite` the file must not exist yet
async fn write_output(destination: &Path, contents: &[u8], overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(destination).await.map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::OutputExists {
            path: destination.to_path_buf(),
        },
        _ => Error::Other {
            message: format!("Failed to write {}: {}", destination.display(), Error::Io(e)),
        },
    })?;

    file.write_all(contents)
        .await
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    Ok(())
}
