//! Collection-backed table rendered through columns, headers, and row styles.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use markup::{SafeHtml, SafeHtmlBuilder};

use crate::column::AnyColumn;
use crate::error::CellViewError;
use crate::header::AnyHeader;
use crate::row_style::RowStyles;

/// Unique identifier for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Style-class names applied by the table itself.
///
/// Row-style providers and per-column cell styles are appended after these;
/// the table owns the base classes only.
#[derive(Debug, Clone)]
pub struct TableStyle {
    pub table: String,
    pub header: String,
    pub even_row: String,
    pub odd_row: String,
    pub selected_row: String,
    pub cell: String,
    pub first_column: String,
    pub last_column: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            table: "cv-table".into(),
            header: "cv-header".into(),
            even_row: "cv-even".into(),
            odd_row: "cv-odd".into(),
            selected_row: "cv-selected".into(),
            cell: "cv-cell".into(),
            first_column: "cv-first-column".into(),
            last_column: "cv-last-column".into(),
        }
    }
}

struct ColumnEntry<T> {
    column: Box<dyn AnyColumn<T>>,
    header: Option<Box<dyn AnyHeader>>,
}

struct TableInner<T> {
    columns: Vec<ColumnEntry<T>>,
    rows: Vec<T>,
    selected: HashSet<usize>,
    row_styles: Option<Box<dyn RowStyles<T>>>,
    style: TableStyle,
}

impl<T> Default for TableInner<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            selected: HashSet::new(),
            row_styles: None,
            style: TableStyle::default(),
        }
    }
}

/// A collection-backed table.
///
/// Columns, headers, and the row-style provider are wired once at
/// configuration time; [`render`](Self::render) then walks the rows and
/// consults each column's extraction and cell for every visible cell.
///
/// Cheaply cloneable handle: clones share state.
pub struct CellTable<T> {
    id: TableId,
    inner: Arc<RwLock<TableInner<T>>>,
    dirty: Arc<AtomicBool>,
}

impl<T> Clone for CellTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T> std::fmt::Debug for CellTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellTable")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<T> Default for CellTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CellTable<T> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let table = Self::new();
        table.set_rows(rows);
        table
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the table ID as a string (for host-side element binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns and headers
    // -------------------------------------------------------------------------

    /// Append a column without a heading.
    pub fn add_column(&self, column: impl AnyColumn<T> + 'static) {
        if let Ok(mut inner) = self.inner.write() {
            inner.columns.push(ColumnEntry {
                column: Box::new(column),
                header: None,
            });
        }
        self.mark_dirty();
    }

    /// Append a column with a heading.
    pub fn add_column_with_header(
        &self,
        column: impl AnyColumn<T> + 'static,
        header: impl AnyHeader + 'static,
    ) {
        if let Ok(mut inner) = self.inner.write() {
            inner.columns.push(ColumnEntry {
                column: Box::new(column),
                header: Some(Box::new(header)),
            });
        }
        self.mark_dirty();
    }

    /// Insert a column before `index`.
    ///
    /// `index` equal to the column count appends.
    pub fn insert_column(
        &self,
        index: usize,
        column: impl AnyColumn<T> + 'static,
    ) -> Result<(), CellViewError> {
        self.insert_entry(
            index,
            ColumnEntry {
                column: Box::new(column),
                header: None,
            },
        )
    }

    /// Insert a column with a heading before `index`.
    pub fn insert_column_with_header(
        &self,
        index: usize,
        column: impl AnyColumn<T> + 'static,
        header: impl AnyHeader + 'static,
    ) -> Result<(), CellViewError> {
        self.insert_entry(
            index,
            ColumnEntry {
                column: Box::new(column),
                header: Some(Box::new(header)),
            },
        )
    }

    fn insert_entry(&self, index: usize, entry: ColumnEntry<T>) -> Result<(), CellViewError> {
        if let Ok(mut inner) = self.inner.write() {
            let len = inner.columns.len();
            if index > len {
                return Err(CellViewError::ColumnIndexOutOfBounds { index, len });
            }
            inner.columns.insert(index, entry);
        }
        self.mark_dirty();
        Ok(())
    }

    /// Remove the column at `index`.
    pub fn remove_column(&self, index: usize) -> Result<(), CellViewError> {
        if let Ok(mut inner) = self.inner.write() {
            let len = inner.columns.len();
            if index >= len {
                return Err(CellViewError::ColumnIndexOutOfBounds { index, len });
            }
            inner.columns.remove(index);
        }
        self.mark_dirty();
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.columns.len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Rows and selection
    // -------------------------------------------------------------------------

    /// Replace all rows. Selection is cleared.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.rows = rows;
            inner.selected.clear();
        }
        self.mark_dirty();
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark a row as selected or not. Out-of-range indices are ignored.
    pub fn set_selected(&self, row_index: usize, selected: bool) {
        if let Ok(mut inner) = self.inner.write() {
            if row_index >= inner.rows.len() {
                return;
            }
            if selected {
                inner.selected.insert(row_index);
            } else {
                inner.selected.remove(&row_index);
            }
        }
        self.mark_dirty();
    }

    pub fn is_selected_at(&self, row_index: usize) -> bool {
        self.inner
            .read()
            .map(|inner| inner.selected.contains(&row_index))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Styling
    // -------------------------------------------------------------------------

    /// Set the provider consulted for extra per-row style classes.
    ///
    /// Replaces any previous provider; providers compose by wrapping in a
    /// single closure before this call.
    pub fn set_row_styles(&self, provider: impl RowStyles<T> + 'static) {
        if let Ok(mut inner) = self.inner.write() {
            inner.row_styles = Some(Box::new(provider));
        }
        self.mark_dirty();
    }

    pub fn clear_row_styles(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.row_styles = None;
        }
        self.mark_dirty();
    }

    /// Replace the base style-class set.
    pub fn set_style(&self, style: TableStyle) {
        if let Ok(mut inner) = self.inner.write() {
            inner.style = style;
        }
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the whole table to markup.
    ///
    /// Headers render once per call, not per row. For each row the base
    /// even/odd class comes first, then the selected class, then the
    /// row-style provider's output; the provider is consulted exactly once
    /// per row.
    pub fn render(&self) -> SafeHtml {
        let Ok(inner) = self.inner.read() else {
            return SafeHtml::from_trusted(String::new());
        };
        log::trace!(
            "table {} render pass: {} rows, {} columns",
            self.id,
            inner.rows.len(),
            inner.columns.len()
        );

        let mut sb = SafeHtmlBuilder::new();
        sb.append_html_constant("<table class=\"");
        sb.append_escaped(&inner.style.table);
        sb.append_html_constant("\">");
        render_headers(&inner, &mut sb);
        render_rows(&inner, &mut sb);
        sb.append_html_constant("</table>");
        sb.into_safe_html()
    }
}

fn render_headers<T>(inner: &TableInner<T>, sb: &mut SafeHtmlBuilder) {
    if inner.columns.iter().all(|entry| entry.header.is_none()) {
        return;
    }
    sb.append_html_constant("<thead><tr>");
    for entry in &inner.columns {
        sb.append_html_constant("<th class=\"");
        sb.append_escaped(&inner.style.header);
        sb.append_html_constant("\">");
        if let Some(header) = &entry.header {
            header.render_header(sb);
        }
        sb.append_html_constant("</th>");
    }
    sb.append_html_constant("</tr></thead>");
}

fn render_rows<T>(inner: &TableInner<T>, sb: &mut SafeHtmlBuilder) {
    let column_count = inner.columns.len();
    sb.append_html_constant("<tbody>");
    for (row_index, row) in inner.rows.iter().enumerate() {
        let is_even = row_index % 2 == 0;
        let is_selected = inner.selected.contains(&row_index);

        let mut tr_classes = if is_even {
            inner.style.even_row.clone()
        } else {
            inner.style.odd_row.clone()
        };
        if is_selected {
            tr_classes.push(' ');
            tr_classes.push_str(&inner.style.selected_row);
        }
        if let Some(row_styles) = &inner.row_styles {
            if let Some(extra) = row_styles.style_names(row, row_index) {
                tr_classes.push(' ');
                tr_classes.push_str(&extra);
            }
        }

        sb.append_html_constant("<tr class=\"");
        sb.append_escaped(&tr_classes);
        sb.append_html_constant("\">");

        for (column_index, entry) in inner.columns.iter().enumerate() {
            let mut td_classes = inner.style.cell.clone();
            if column_index == 0 {
                td_classes.push(' ');
                td_classes.push_str(&inner.style.first_column);
            }
            // The first and last column could be the same column.
            if column_index + 1 == column_count {
                td_classes.push(' ');
                td_classes.push_str(&inner.style.last_column);
            }
            if let Some(extra) = entry.column.cell_style_names(row, row_index) {
                td_classes.push(' ');
                td_classes.push_str(&extra);
            }

            sb.append_html_constant("<td class=\"");
            sb.append_escaped(&td_classes);
            sb.append_html_constant("\">");
            let mut cell_builder = SafeHtmlBuilder::new();
            entry.column.render_cell(row, &mut cell_builder);
            sb.append(&cell_builder.into_safe_html());
            sb.append_html_constant("</td>");
        }

        sb.append_html_constant("</tr>");
    }
    sb.append_html_constant("</tbody>");
}

impl<T: Clone> CellTable<T> {
    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.rows.get(index).cloned())
    }
}
