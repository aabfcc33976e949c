//! The unit of work handed to a template engine.
//!
//! A [`Fragment`] pairs a template body (markup source text) with the
//! structured payload it is rendered against. Fragments are produced by the
//! host framework's content pipeline and treated as immutable input for the
//! duration of a render call.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How many body characters [`Fragment::abbreviate`] keeps for log lines.
const ABBREVIATE_LEN: usize = 48;

/// A unit of template source text plus the data context it renders against.
///
/// # Examples
///
/// ```
/// use fragment_te_api::Fragment;
/// use serde_json::json;
///
/// let fragment = Fragment::new("snippet", "Hello {{ name }}!", json!({"name": "World"}));
/// assert_eq!(fragment.body(), "Hello {{ name }}!");
/// assert_eq!(fragment.payload()["name"], "World");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Identifier assigned by the host pipeline. Not part of the cache key.
    id: String,
    /// The template source text.
    body: String,
    /// The data context, a tree of maps/sequences/scalars.
    payload: Value,
}

impl Fragment {
    /// Creates a fragment from an id, a template body, and a payload.
    pub fn new(id: impl Into<String>, body: impl Into<String>, payload: Value) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            payload,
        }
    }

    /// The pipeline-assigned fragment identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The template source text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The structured data context for rendering.
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// A shortened representation of the body, suitable for log lines.
    pub fn abbreviate(&self) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(ABBREVIATE_LEN).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment{{id='{}', body='{}'}}", self.id, self.abbreviate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fragment_accessors() {
        let fragment = Fragment::new("f1", "{{ a }}", json!({"a": 1}));
        assert_eq!(fragment.id(), "f1");
        assert_eq!(fragment.body(), "{{ a }}");
        assert_eq!(fragment.payload(), &json!({"a": 1}));
    }

    #[test]
    fn test_abbreviate_short_body_unchanged() {
        let fragment = Fragment::new("f1", "short", json!({}));
        assert_eq!(fragment.abbreviate(), "short");
    }

    #[test]
    fn test_abbreviate_long_body_truncated() {
        let body = "x".repeat(100);
        let fragment = Fragment::new("f1", body, json!({}));
        let abbreviated = fragment.abbreviate();
        assert_eq!(abbreviated.len(), ABBREVIATE_LEN + 3);
        assert!(abbreviated.ends_with("..."));
    }

    #[test]
    fn test_display_includes_id_and_body() {
        let fragment = Fragment::new("f1", "Hello", json!({}));
        let shown = fragment.to_string();
        assert!(shown.contains("f1"));
        assert!(shown.contains("Hello"));
    }

    #[test]
    fn test_fragment_json_round_trip() {
        let fragment = Fragment::new("f1", "{{ a }}", json!({"a": [1, 2]}));
        let json = serde_json::to_string(&fragment).unwrap();
        let back: Fragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), "f1");
        assert_eq!(back.body(), "{{ a }}");
        assert_eq!(back.payload(), &json!({"a": [1, 2]}));
    }
}
