//! Cell renderers: the boundary that turns a typed value into markup.

use markup::{SafeHtml, SafeHtmlBuilder};

/// Renders a value of type `V` into markup.
///
/// A cell decides how its value reaches the output: escaped as literal text,
/// or passed through because the value is already sanitized. Columns and
/// headers supply the value; the cell never sees rows.
pub trait Cell<V>: Send + Sync {
    fn render(&self, value: &V, out: &mut SafeHtmlBuilder);
}

/// Renders strings as literal text.
///
/// Every character is escaped before display, so the value is never
/// interpreted as markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCell;

impl Cell<String> for TextCell {
    fn render(&self, value: &String, out: &mut SafeHtmlBuilder) {
        out.append_escaped(value);
    }
}

/// Passes pre-sanitized markup through unescaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeHtmlCell;

impl Cell<SafeHtml> for SafeHtmlCell {
    fn render(&self, value: &SafeHtml, out: &mut SafeHtmlBuilder) {
        out.append(value);
    }
}
