//! Column headings: row-independent value/cell pairs.

use markup::{SafeHtml, SafeHtmlBuilder};

use crate::cell::{Cell, SafeHtmlCell, TextCell};

/// A row-independent value paired with the cell that renders it.
///
/// Unlike a column there is no row argument: the table calls `value` once
/// per structural re-render of the headings, not per row. The value is
/// immutable after construction.
pub trait Header: Send + Sync {
    type Value;

    /// The heading value supplied at construction.
    fn value(&self) -> Self::Value;

    /// The cell that renders the heading value.
    fn cell(&self) -> &dyn Cell<Self::Value>;

    /// Render the heading value through the cell.
    fn render(&self, out: &mut SafeHtmlBuilder) {
        self.cell().render(&self.value(), out);
    }
}

/// A static text heading, rendered escaped.
#[derive(Debug, Clone)]
pub struct TextHeader {
    text: String,
    cell: TextCell,
}

impl TextHeader {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cell: TextCell,
        }
    }
}

impl Header for TextHeader {
    type Value = String;

    fn value(&self) -> String {
        self.text.clone()
    }

    fn cell(&self) -> &dyn Cell<String> {
        &self.cell
    }
}

/// A heading holding pre-sanitized markup, rendered unescaped.
///
/// The value passed at construction must come from a sanitizing encoder,
/// never from unescaped user input; the [`SafeHtml`] parameter type carries
/// that obligation to the caller.
#[derive(Debug, Clone)]
pub struct SafeHtmlHeader {
    html: SafeHtml,
    cell: SafeHtmlCell,
}

impl SafeHtmlHeader {
    pub fn new(html: SafeHtml) -> Self {
        Self {
            html,
            cell: SafeHtmlCell,
        }
    }
}

impl Header for SafeHtmlHeader {
    type Value = SafeHtml;

    fn value(&self) -> SafeHtml {
        self.html.clone()
    }

    fn cell(&self) -> &dyn Cell<SafeHtml> {
        &self.cell
    }
}

/// Type-erased header operations for use in the table.
pub trait AnyHeader: Send + Sync {
    /// Render the heading value through the header's cell.
    fn render_header(&self, out: &mut SafeHtmlBuilder);
}

impl<H: Header> AnyHeader for H {
    fn render_header(&self, out: &mut SafeHtmlBuilder) {
        Header::render(self, out);
    }
}

impl std::fmt::Debug for dyn AnyHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AnyHeader")
    }
}
