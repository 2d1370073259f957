//! Redirect rule conversion
//!
//! Each source rule maps to exactly one target rule, in order, with no
//! state carried between rules.

use crate::document::parse_source;
use crate::error::Result;
use crate::report::{ConversionReport, FallbackField, FallbackReason, ReportBuilder};
use crate::types::{SourceDocument, SourceRule, TargetDocument, TargetRule, FALLBACK_PATH};
use serde_json::Value;

/// Convert a decoded export into a `vercel.json` document
pub fn convert(source: &SourceDocument) -> TargetDocument {
    TargetDocument {
        redirects: source.redirects.iter().map(TargetRule::from).collect(),
    }
}

/// Convert and also report every fallback substitution
pub fn convert_with_report(source: &SourceDocument) -> (TargetDocument, ConversionReport) {
    let mut builder = ReportBuilder::with_capacity(source.redirects.len());

    let redirects = source
        .redirects
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            if let Some(reason) = fallback_reason(rule.match_url.as_deref()) {
                builder.record_fallback(index, FallbackField::Source, reason);
            }
            if let Some(reason) = fallback_reason(rule.action_url()) {
                builder.record_fallback(index, FallbackField::Destination, reason);
            }

            let target = TargetRule::from(rule);
            builder.record_rule(target.permanent);
            target
        })
        .collect();

    let report = builder.finish();
    tracing::debug!(
        total = report.total,
        permanent = report.permanent,
        fallbacks = report.fallbacks.len(),
        "converted redirect rules"
    );

    (TargetDocument { redirects }, report)
}

/// Schema-check already-parsed JSON and convert it
pub fn convert_value(value: &Value) -> Result<TargetDocument> {
    let source = SourceDocument::from_value(value.clone())?;
    Ok(convert(&source))
}

/// Parse, schema-check and convert raw export text
pub fn convert_str(text: &str) -> Result<TargetDocument> {
    let source = parse_source(text)?;
    Ok(convert(&source))
}

impl From<&SourceRule> for TargetRule {
    fn from(rule: &SourceRule) -> Self {
        TargetRule {
            source: path_or_fallback(rule.match_url.as_deref()),
            destination: path_or_fallback(rule.action_url()),
            permanent: rule.is_permanent(),
        }
    }
}

fn path_or_fallback(path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => FALLBACK_PATH.to_string(),
    }
}

fn fallback_reason(path: Option<&str>) -> Option<FallbackReason> {
    match path {
        None => Some(FallbackReason::Missing),
        Some("") => Some(FallbackReason::Empty),
        Some(_) => None,
    }
}
