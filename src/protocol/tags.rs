//! Header tag pairs: the `[Key "Value"]` block above the move text.
//!
//! One tag is mandatory on export (`CustomSetup`, carrying the encoded
//! setup); everything else is free-form metadata. Order is insignificant
//! on import; unknown tags are preserved verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

/// The tag carrying the base64-encoded compact setup.
pub const CUSTOM_SETUP_TAG: &str = "CustomSetup";

static TAG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*\[\s*(\w+)\s+"((?:[^"\\]|\\.)*)"\s*\]\s*$"#).expect("tag pattern compiles")
});

/// An ordered set of header tags. Keys are unique; setting an existing key
/// replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagPairs {
    pairs: Vec<(String, String)>,
}

impl TagPairs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tag, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Get a tag's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parse one header line. Returns None if the line is not a tag.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<(String, String)> {
        let captures = TAG_LINE.captures(line)?;
        Some((captures[1].to_string(), unescape(&captures[2])))
    }

    /// Render one `[Key "Value"]` line.
    #[must_use]
    pub fn render_line(key: &str, value: &str) -> String {
        format!("[{} \"{}\"]", key, escape(value))
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            TagPairs::parse_line(r#"[Event "Winter Siege"]"#),
            Some(("Event".to_string(), "Winter Siege".to_string()))
        );
        assert_eq!(
            TagPairs::parse_line(r#"  [ Site  "Keep"  ]  "#),
            Some(("Site".to_string(), "Keep".to_string()))
        );
        assert_eq!(TagPairs::parse_line("1. J11J10"), None);
        assert_eq!(TagPairs::parse_line(""), None);
        assert_eq!(TagPairs::parse_line(r#"[Broken "no close"#), None);
    }

    #[test]
    fn test_escaping_round_trip() {
        let value = r#"a "quoted" \ backslash"#;
        let line = TagPairs::render_line("Note", value);
        let (key, parsed) = TagPairs::parse_line(&line).unwrap();
        assert_eq!(key, "Note");
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_set_replaces() {
        let mut tags = TagPairs::new();
        tags.set("Event", "First");
        tags.set("Site", "Keep");
        tags.set("Event", "Second");

        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("Event"), Some("Second"));
        // Insertion order preserved.
        let keys: Vec<_> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Event", "Site"]);
    }

    #[test]
    fn test_get_missing() {
        let tags = TagPairs::new();
        assert_eq!(tags.get("Nope"), None);
    }
}
