//! Incremental construction of safe markup.

use crate::safe_html::{escape_html, SafeHtml};

/// Accumulates markup fragments into a [`SafeHtml`] value.
///
/// Every byte reaching the buffer is escaped by the builder, was already
/// wrapped in [`SafeHtml`], or was supplied as a trusted compile-time
/// constant. There is no unchecked append for runtime strings.
#[derive(Debug, Default)]
pub struct SafeHtmlBuilder {
    buf: String,
}

impl SafeHtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pre-sanitized markup unescaped.
    pub fn append(&mut self, html: &SafeHtml) -> &mut Self {
        self.buf.push_str(html.as_str());
        self
    }

    /// Escape `text` and append it as literal text.
    pub fn append_escaped(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    /// Append a trusted markup literal.
    ///
    /// Restricted to `&'static str` so only constants written alongside the
    /// rendering code qualify; runtime strings must go through
    /// [`append`](Self::append) or [`append_escaped`](Self::append_escaped).
    pub fn append_html_constant(&mut self, html: &'static str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish building and wrap the accumulated markup.
    pub fn into_safe_html(self) -> SafeHtml {
        SafeHtml::from_trusted(self.buf)
    }
}
