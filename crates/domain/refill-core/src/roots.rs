use camino::Utf8Path;
use std::fmt;
use std::path::{is_separator, MAIN_SEPARATOR};

/// Local directory whose existing files define what gets replaced.
///
/// The stored form always ends with a path separator. Existence is checked by
/// the pipeline before one of these is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot {
    prefix: String,
}

impl SourceRoot {
    pub fn new(raw: &str) -> Self {
        Self {
            prefix: Self::normalize(raw),
        }
    }

    /// Append the host separator unless the path already ends with one.
    pub fn normalize(raw: &str) -> String {
        if raw.is_empty() {
            return format!(".{MAIN_SEPARATOR}");
        }
        if raw.chars().next_back().is_some_and(is_separator) {
            raw.to_string()
        } else {
            format!("{raw}{MAIN_SEPARATOR}")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    pub fn as_path(&self) -> &Utf8Path {
        Utf8Path::new(&self.prefix)
    }
}

impl fmt::Display for SourceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

/// URL prefix under which every local file has a counterpart.
///
/// Not validated: a malformed base only shows up as per-file fetch failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBase {
    base: String,
}

impl RemoteBase {
    pub fn new(raw: &str) -> Self {
        Self {
            base: Self::normalize(raw),
        }
    }

    pub fn normalize(raw: &str) -> String {
        if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Append an already escaped relative path.
    pub fn join(&self, escaped_rel: &str) -> String {
        format!("{}{}", self.base, escaped_rel)
    }
}

impl fmt::Display for RemoteBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
