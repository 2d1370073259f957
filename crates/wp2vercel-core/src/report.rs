//! Fallback reporting for conversions
//!
//! A conversion never fails on a rule with a missing path; it substitutes
//! `/` instead. The report records every substitution so a user can spot
//! rules that collapsed onto the site root.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target field that received the fallback path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackField {
    Source,
    Destination,
}

/// Why the fallback was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Field (or its enclosing `action_data`) was absent or null
    Missing,
    /// Field was present as an empty string
    Empty,
}

/// One substitution of the fallback path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    /// Position of the rule in `redirects`
    pub index: usize,
    pub field: FallbackField,
    pub reason: FallbackReason,
}

/// Summary of a single conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub total: usize,
    pub permanent: usize,
    pub temporary: usize,
    pub fallbacks: Vec<Fallback>,
}

impl ConversionReport {
    pub fn has_fallbacks(&self) -> bool {
        !self.fallbacks.is_empty()
    }

    /// Fallbacks applied to the given field
    pub fn fallbacks_for(&self, field: FallbackField) -> impl Iterator<Item = &Fallback> {
        self.fallbacks.iter().filter(move |f| f.field == field)
    }
}

/// Accumulates a [`ConversionReport`] while rules are mapped
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    report: ConversionReport,
}

impl ReportBuilder {
    pub(crate) fn with_capacity(rules: usize) -> Self {
        Self {
            report: ConversionReport {
                total: 0,
                permanent: 0,
                temporary: 0,
                fallbacks: Vec::with_capacity(rules / 4),
            },
        }
    }

    pub(crate) fn record_rule(&mut self, permanent: bool) {
        self.report.total += 1;
        if permanent {
            self.report.permanent += 1;
        } else {
            self.report.temporary += 1;
        }
    }

    pub(crate) fn record_fallback(&mut self, index: usize, field: FallbackField, reason: FallbackReason) {
        tracing::trace!(index, field = %field, reason = %reason, "fallback path applied");
        self.report.fallbacks.push(Fallback { index, field, reason });
    }

    pub(crate) fn finish(self) -> ConversionReport {
        self.report
    }
}

impl fmt::Display for FallbackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackField::Source => write!(f, "source"),
            FallbackField::Destination => write!(f, "destination"),
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Missing => write!(f, "missing"),
            FallbackReason::Empty => write!(f, "empty"),
        }
    }
}
