pub mod builder;
pub mod safe_html;

pub use builder::SafeHtmlBuilder;
pub use safe_html::{escape_html, SafeHtml};
