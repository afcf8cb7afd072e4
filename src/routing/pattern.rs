// SPDX-License-Identifier: MPL-2.0
//! Path patterns such as `/blogs/:slug`.
//!
//! A pattern is a list of segments: static text matched ASCII
//! case-insensitively, or `:name` parameters capturing exactly one non-empty
//! segment. Empty segments are ignored on both sides, which makes the
//! trailing slash optional.

use crate::error::RouteError;
use std::fmt;
use std::str::FromStr;

/// Parameters captured from a path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of parameter `name`, if captured.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed, validated path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in split_segments(raw) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(invalid("parameter names may only use [A-Za-z0-9_]"));
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                if duplicate {
                    return Err(invalid("duplicate parameter name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters this pattern captures, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches a bare path (no query or fragment) and captures parameters.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), decode_segment(part)),
            }
        }
        Some(params)
    }

    /// Builds a concrete path, percent-encoding parameter values.
    pub fn build(&self, params: &Params) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            pattern: self.raw.clone(),
                            param: name.clone(),
                        })?;
                    path.push_str(&encode_segment(value));
                }
            }
        }
        Ok(path)
    }
}

impl FromStr for PathPattern {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Decodes `%XX` escapes. Falls back to the raw text when the result is not UTF-8.
fn decode_segment(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| raw.to_string())
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> PathPattern {
        PathPattern::parse(raw).expect("valid pattern")
    }

    #[test]
    fn root_matches_only_root() {
        let root = pattern("/");
        assert_eq!(root.matches("/"), Some(Params::new()));
        assert_eq!(root.matches(""), Some(Params::new()));
        assert!(root.matches("/blogs").is_none());
    }

    #[test]
    fn param_captures_one_segment() {
        let p = pattern("/blogs/:slug");
        let params = p.matches("/blogs/hello-world").expect("should match");
        assert_eq!(params.get("slug"), Some("hello-world"));

        assert!(p.matches("/blogs").is_none());
        assert!(p.matches("/blogs/a/b").is_none());
    }

    #[test]
    fn trailing_slash_and_case_are_tolerated() {
        let p = pattern("/blogs");
        assert!(p.matches("/blogs/").is_some());
        assert!(p.matches("/Blogs").is_some());
    }

    #[test]
    fn param_value_keeps_case_and_is_decoded() {
        let p = pattern("/project/:id");
        let params = p.matches("/project/My%20Project").expect("should match");
        assert_eq!(params.get("id"), Some("My Project"));
    }

    #[test]
    fn malformed_escape_is_kept_verbatim() {
        let p = pattern("/blogs/:slug");
        let params = p.matches("/blogs/100%").expect("should match");
        assert_eq!(params.get("slug"), Some("100%"));

        let params = p.matches("/blogs/%zz").expect("should match");
        assert_eq!(params.get("slug"), Some("%zz"));
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        for raw in ["blogs", "/blogs/:", "/a/:x/:x", "/a/:bad-name"] {
            assert!(
                matches!(PathPattern::parse(raw), Err(RouteError::InvalidPattern { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn build_encodes_and_requires_params() {
        let p = pattern("/blogs/:slug");
        let params: Params = [("slug", "rust & iced")].into_iter().collect();
        assert_eq!(p.build(&params).unwrap(), "/blogs/rust%20%26%20iced");

        let err = p.build(&Params::new()).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParam {
                pattern: "/blogs/:slug".into(),
                param: "slug".into()
            }
        );
    }

    #[test]
    fn built_path_matches_back_to_same_params() {
        let p = pattern("/project/:id");
        let params: Params = [("id", "é/ü?#")].into_iter().collect();
        let path = p.build(&params).unwrap();
        assert_eq!(p.matches(&path), Some(params));
    }

    #[test]
    fn param_names_follow_pattern_order() {
        let p = pattern("/a/:first/b/:second");
        assert_eq!(p.param_names().collect::<Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut params = Params::new();
        params.insert("id", "1");
        params.insert("id", "2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("2"));
    }
}
