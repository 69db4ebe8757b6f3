//! Slug and namespace derivation from a human-readable theme title.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\-_]").unwrap());

/// Turns a title into a filesystem-safe slug.
///
/// The title is lowercased, every whitespace run becomes a single `-`, and
/// anything outside `[a-z-_]` is dropped. `"My Theme"` becomes `"my-theme"`.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// Turns a title into a code identifier such as `My_Theme`.
///
/// Whitespace, hyphens and `|` become underscores. A lowercase ASCII letter
/// at the start or right after an underscore is upper-cased.
pub fn derive_namespace(title: &str) -> String {
    let mut namespace = String::with_capacity(title.len());
    let mut at_boundary = true;

    for ch in title.chars() {
        let ch = if ch.is_whitespace() || ch == '-' || ch == '|' { '_' } else { ch };
        if ch == '_' {
            namespace.push(ch);
            at_boundary = true;
            continue;
        }
        if at_boundary {
            namespace.push(ch.to_ascii_uppercase());
        } else {
            namespace.push(ch);
        }
        at_boundary = false;
    }

    namespace
}

/// Checks that a derived namespace is usable as a code identifier.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    let Some(first) = namespace.chars().next() else {
        return Err(Error::ValidationError("namespace must not be empty".to_string()));
    };
    if first.is_ascii_digit() {
        return Err(Error::ValidationError(format!(
            "namespace '{namespace}' must not start with a digit"
        )));
    }
    if let Some(bad) = namespace.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Err(Error::ValidationError(format!(
            "namespace '{namespace}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

/// Identifiers computed from the project title, never collected directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    file_slug: String,
    namespace: String,
}

impl DerivedIdentifiers {
    /// Derives and validates both identifiers for a title.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the slug is empty or the namespace is
    ///   not a valid identifier
    pub fn derive(title: &str) -> Result<Self> {
        let file_slug = derive_slug(title);
        if file_slug.is_empty() {
            return Err(Error::ValidationError(format!(
                "title '{title}' does not produce a usable file slug"
            )));
        }
        let namespace = derive_namespace(title);
        validate_namespace(&namespace)?;

        Ok(Self { file_slug, namespace })
    }

    pub fn file_slug(&self) -> &str {
        &self.file_slug
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_after_leading_separator() {
        assert_eq!(derive_namespace("-theme"), "_Theme");
        assert_eq!(derive_namespace("a  b"), "A__B");
    }

    #[test]
    fn test_non_ascii_letters_are_left_alone() {
        assert_eq!(derive_namespace("élan theme"), "élan_Theme");
        assert_eq!(derive_slug("Élan Theme"), "lan-theme");
    }
}
