//! Markup values guaranteed free of injection risk.
//!
//! `SafeHtml` is a marker type: holding one means the contained markup has
//! either been escaped here or was vouched for by the caller. Rendering code
//! accepts `SafeHtml` where interpreting content as markup is allowed, and
//! plain `&str` only where it will be escaped.

use serde::{Deserialize, Serialize};

/// Markup content that is safe to emit without further escaping.
///
/// The invariant is established at construction: [`SafeHtml::from_text`]
/// escapes its input, while [`SafeHtml::from_trusted`] requires the caller to
/// guarantee the input came from a sanitizing encoder, never from unescaped
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup the caller guarantees is already sanitized.
    ///
    /// No escaping is performed. Passing unescaped user input here defeats
    /// the type's guarantee.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text and wrap the result.
    pub fn from_text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// The underlying markup string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying markup string.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the five HTML metacharacters: `&`, `<`, `>`, `"`, `'`.
///
/// `&` is replaced first by construction (single pass), so already-escaped
/// entities in the input are double-escaped rather than preserved. Callers
/// holding pre-escaped content should use [`SafeHtml::from_trusted`].
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
