//! Property-based tests for the conversion engine
//!
//! These tests verify the invariants that should hold for every export the
//! schema accepts.

use proptest::prelude::*;
use wp2vercel_core::types::*;
use wp2vercel_core::{convert, convert_str, convert_with_report, render, FallbackField};

/// Strategy for optional paths, biased towards the interesting cases
fn path_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        2 => Just(Some(String::new())),
        6 => "/[a-z0-9/_-]{0,30}".prop_map(Some),
    ]
}

/// Strategy for action codes around the permanent boundary
fn action_code_strategy() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        Just(None),
        Just(Some(300)),
        Just(Some(301)),
        Just(Some(302)),
        (100i64..600).prop_map(Some),
    ]
}

fn source_rule_strategy() -> impl Strategy<Value = SourceRule> {
    (
        path_strategy(),
        action_code_strategy(),
        proptest::option::of(path_strategy()),
    )
        .prop_map(|(match_url, action_code, action_data)| SourceRule {
            match_url,
            action_code,
            action_data: action_data.map(|url| ActionData { url }),
        })
}

fn source_document_strategy() -> impl Strategy<Value = SourceDocument> {
    proptest::collection::vec(source_rule_strategy(), 0..40)
        .prop_map(|redirects| SourceDocument { redirects })
}

proptest! {
    #[test]
    fn prop_length_is_preserved(doc in source_document_strategy()) {
        prop_assert_eq!(convert(&doc).redirects.len(), doc.redirects.len());
    }

    #[test]
    fn prop_each_rule_maps_independently(doc in source_document_strategy()) {
        let output = convert(&doc);

        for (index, rule) in doc.redirects.iter().enumerate() {
            let alone = convert(&SourceDocument { redirects: vec![rule.clone()] });
            prop_assert_eq!(&output.redirects[index], &alone.redirects[0]);
        }
    }

    #[test]
    fn prop_permanent_iff_301(rule in source_rule_strategy()) {
        let output = convert(&SourceDocument { redirects: vec![rule.clone()] });
        prop_assert_eq!(output.redirects[0].permanent, rule.action_code == Some(301));
    }

    #[test]
    fn prop_paths_never_empty(doc in source_document_strategy()) {
        for rule in convert(&doc).redirects {
            prop_assert!(!rule.source.is_empty());
            prop_assert!(!rule.destination.is_empty());
        }
    }

    #[test]
    fn prop_non_empty_paths_pass_through(rule in source_rule_strategy()) {
        let output = convert(&SourceDocument { redirects: vec![rule.clone()] });
        let target = &output.redirects[0];

        match rule.match_url.as_deref() {
            Some(path) if !path.is_empty() => prop_assert_eq!(target.source.as_str(), path),
            _ => prop_assert_eq!(target.source.as_str(), FALLBACK_PATH),
        }
        match rule.action_url() {
            Some(url) if !url.is_empty() => prop_assert_eq!(target.destination.as_str(), url),
            _ => prop_assert_eq!(target.destination.as_str(), FALLBACK_PATH),
        }
    }

    #[test]
    fn prop_report_agrees_with_output(doc in source_document_strategy()) {
        let (output, report) = convert_with_report(&doc);

        prop_assert_eq!(&output, &convert(&doc));
        prop_assert_eq!(report.total, output.len());
        prop_assert_eq!(report.permanent, output.permanent_count());
        prop_assert_eq!(report.permanent + report.temporary, report.total);

        let fallback_sources = report.fallbacks_for(FallbackField::Source).count();
        let root_sources = doc
            .redirects
            .iter()
            .filter(|rule| rule.match_url.as_deref().map_or(true, str::is_empty))
            .count();
        prop_assert_eq!(fallback_sources, root_sources);
    }

    #[test]
    fn prop_serialized_export_converts_identically(doc in source_document_strategy()) {
        let text = serde_json::to_string(&doc).unwrap();
        let output = convert_str(&text).unwrap();
        prop_assert_eq!(output, convert(&doc));
    }

    #[test]
    fn prop_render_is_deterministic(doc in source_document_strategy()) {
        let output = convert(&doc);
        prop_assert_eq!(render(&output).unwrap(), render(&convert(&doc)).unwrap());
    }
}
