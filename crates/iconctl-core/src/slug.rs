//! Filesystem-safe institution slugs.
//!
//! `normalize` turns free text into lowercase ASCII words joined by single
//! underscores. Non-ASCII characters that survive NFKD decomposition are
//! dropped, so `"Itaú"` becomes `"itau"` but `"北京"` becomes empty.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// NFKD, ASCII-only, lowercase, non-alphanumeric runs replaced by `_`, trimmed of `_`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;

    for c in text.nfkd().filter(char::is_ascii) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }

    out
}

/// A non-empty normalized name matching `[a-z0-9]+(_[a-z0-9]+)*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Normalizes `text`; `None` when nothing usable remains.
    pub fn new(text: &str) -> Option<Slug> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            None
        } else {
            Some(Slug(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
