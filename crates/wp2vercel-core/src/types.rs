//! Core data types for wp2vercel
//!
//! The source side mirrors the export produced by the WordPress Redirection
//! plugin; only the fields the conversion reads are modelled, everything else
//! in the export is ignored on deserialization. The target side is the
//! `redirects` section of a `vercel.json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP status code the Redirection plugin uses for permanent redirects
pub const PERMANENT_ACTION_CODE: i64 = 301;

/// Path substituted when a rule has no usable source or destination
pub const FALLBACK_PATH: &str = "/";

// ========================================================================
// Source schema (WordPress Redirection export)
// ========================================================================

/// A Redirection plugin export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Redirect rules in export order
    pub redirects: Vec<SourceRule>,
}

/// One rule from the export
///
/// Rule fields are decoded leniently: a value of an unexpected JSON type is
/// treated as absent, so one odd rule never rejects the whole export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRule {
    /// Path the rule matches, e.g. `/old-page`
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub match_url: Option<String>,

    /// HTTP status code of the redirect action; integral floats such as
    /// `301.0` count as the integer
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::action_code")]
    pub action_code: Option<i64>,

    /// Action payload; carries the target URL for plain redirects
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::action_data")]
    pub action_data: Option<ActionData>,
}

/// Payload of a redirect action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

impl SourceRule {
    /// Create a rule with all three fields present
    pub fn new(match_url: impl Into<String>, action_code: i64, url: impl Into<String>) -> Self {
        Self {
            match_url: Some(match_url.into()),
            action_code: Some(action_code),
            action_data: Some(ActionData {
                url: Some(url.into()),
            }),
        }
    }

    /// Target URL, if the action carries one
    pub fn action_url(&self) -> Option<&str> {
        self.action_data.as_ref().and_then(|data| data.url.as_deref())
    }

    /// Whether the action code is exactly 301
    pub fn is_permanent(&self) -> bool {
        self.action_code == Some(PERMANENT_ACTION_CODE)
    }
}

mod lenient {
    use super::{ActionData, Value};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(text)) => Some(text),
            Some(other) => {
                tracing::warn!(value = %other, "ignoring non-string path in redirect rule");
                None
            }
            None => None,
        })
    }

    pub fn action_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| {
            let code = integral(&value);
            if code.is_none() {
                tracing::warn!(value = %value, "ignoring non-integral action_code");
            }
            code
        }))
    }

    pub fn action_data<'de, D>(deserializer: D) -> Result<Option<ActionData>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            Some(value @ Value::Object(_)) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
            Some(other) => {
                tracing::warn!(value = %other, "ignoring non-object action_data");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn integral(value: &Value) -> Option<i64> {
        let Value::Number(number) = value else {
            return None;
        };
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        })
    }
}

// ========================================================================
// Target schema (vercel.json)
// ========================================================================

/// The `vercel.json` document produced by a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDocument {
    pub redirects: Vec<TargetRule>,
}

/// A single Vercel redirect
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRule {
    pub source: String,
    pub destination: String,
    pub permanent: bool,
}

impl TargetDocument {
    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }

    /// Number of rules marked permanent
    pub fn permanent_count(&self) -> usize {
        self.redirects.iter().filter(|rule| rule.permanent).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_rule_ignores_unknown_fields() {
        let rule: SourceRule = serde_json::from_value(json!({
            "id": 7,
            "url": "/old",
            "match_url": "/old",
            "match_data": { "source": { "flag_query": "exact" } },
            "action_code": 301,
            "action_type": "url",
            "action_data": { "url": "/new" },
            "match_type": "url",
            "regex": false,
            "group_id": 1,
            "enabled": true
        }))
        .unwrap();

        assert_eq!(rule, SourceRule::new("/old", 301, "/new"));
    }

    #[test]
    fn test_source_rule_null_fields_are_absent() {
        let rule: SourceRule = serde_json::from_value(json!({
            "match_url": null,
            "action_code": null,
            "action_data": null
        }))
        .unwrap();

        assert_eq!(rule, SourceRule::default());
        assert_eq!(rule.action_url(), None);
        assert!(!rule.is_permanent());
    }

    #[test]
    fn test_action_code_of_other_types_is_not_permanent() {
        for code in [json!("301"), json!(true), json!([301]), json!(301.5), json!({ "code": 301 })] {
            let rule: SourceRule = serde_json::from_value(json!({
                "match_url": "/a",
                "action_code": code,
                "action_data": { "url": "/b" }
            }))
            .unwrap();
            assert_eq!(rule.action_code, None);
            assert!(!rule.is_permanent());
        }
    }

    #[test]
    fn test_integral_float_action_code_counts() {
        let rule: SourceRule = serde_json::from_value(json!({ "action_code": 301.0 })).unwrap();
        assert_eq!(rule.action_code, Some(301));
        assert!(rule.is_permanent());

        let rule: SourceRule = serde_json::from_value(json!({ "action_code": 302.0 })).unwrap();
        assert!(!rule.is_permanent());
    }

    #[test]
    fn test_mistyped_paths_are_absent() {
        let rule: SourceRule = serde_json::from_value(json!({
            "match_url": 42,
            "action_code": 301,
            "action_data": { "url": ["/b"] }
        }))
        .unwrap();
        assert_eq!(rule.match_url, None);
        assert_eq!(rule.action_url(), None);

        let rule: SourceRule = serde_json::from_value(json!({ "action_data": "/b" })).unwrap();
        assert_eq!(rule.action_data, None);
    }

    #[test]
    fn test_target_rule_field_order() {
        let rule = TargetRule {
            source: "/a".to_string(),
            destination: "/b".to_string(),
            permanent: true,
        };
        assert_eq!(
            serde_json::to_string(&rule).unwrap(),
            r#"{"source":"/a","destination":"/b","permanent":true}"#
        );
    }

    #[test]
    fn test_permanent_count() {
        let doc = TargetDocument {
            redirects: vec![
                TargetRule { source: "/a".into(), destination: "/".into(), permanent: true },
                TargetRule { source: "/b".into(), destination: "/".into(), permanent: false },
                TargetRule { source: "/c".into(), destination: "/".into(), permanent: true },
            ],
        };
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.permanent_count(), 2);
        assert!(!doc.is_empty());
    }
}
