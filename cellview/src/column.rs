//! Column contract: binds a row type to a cell value via an extraction step.

use markup::SafeHtmlBuilder;

use crate::cell::{Cell, TextCell};

/// Binds a row type `T` to a cell value and the cell that renders it.
///
/// `value` must be pure and deterministic: the table may call it more than
/// once per row within a render pass (measurement and painting). There is no
/// per-cell error channel; an implementation whose extraction logically fails
/// returns a sentinel value instead.
pub trait Column<T>: Send + Sync {
    type Value;

    /// Extract the cell value for a row.
    fn value(&self, row: &T) -> Self::Value;

    /// The cell that renders extracted values.
    fn cell(&self) -> &dyn Cell<Self::Value>;

    /// Extra style-class names for this column's cells, space-separated.
    fn cell_style_names(&self, _row: &T, _row_index: usize) -> Option<String> {
        None
    }

    /// Extract the value for `row` and render it through the cell.
    fn render(&self, row: &T, out: &mut SafeHtmlBuilder) {
        self.cell().render(&self.value(row), out);
    }
}

/// A column that passes the whole row to its cell.
///
/// `value(row)` is the row itself, unconditionally. Useful when the cell
/// needs the entire row object rather than a projected field.
pub struct IdentityColumn<C> {
    cell: C,
}

impl<C> IdentityColumn<C> {
    pub fn new(cell: C) -> Self {
        Self { cell }
    }
}

impl<T, C> Column<T> for IdentityColumn<C>
where
    T: Clone,
    C: Cell<T>,
{
    type Value = T;

    fn value(&self, row: &T) -> T {
        row.clone()
    }

    fn cell(&self) -> &dyn Cell<T> {
        &self.cell
    }
}

/// A column fixed to the plain-text cell.
///
/// The extraction closure must be pure; whatever it returns is escaped and
/// displayed as literal text, never interpreted as markup.
pub struct TextColumn<T> {
    cell: TextCell,
    extract: Box<dyn Fn(&T) -> String + Send + Sync>,
    styles: Option<String>,
}

impl<T> TextColumn<T> {
    pub fn new(extract: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            cell: TextCell,
            extract: Box::new(extract),
            styles: None,
        }
    }

    /// Set fixed per-cell style-class names for this column.
    pub fn with_cell_style_names(mut self, styles: impl Into<String>) -> Self {
        self.styles = Some(styles.into());
        self
    }
}

impl<T> Column<T> for TextColumn<T> {
    type Value = String;

    fn value(&self, row: &T) -> String {
        (self.extract)(row)
    }

    fn cell(&self) -> &dyn Cell<String> {
        &self.cell
    }

    fn cell_style_names(&self, _row: &T, _row_index: usize) -> Option<String> {
        self.styles.clone()
    }
}

/// A column built from an arbitrary cell and extraction closure.
///
/// The open extension point: application columns that do not fit the
/// built-in variants pair any cell with any pure projection.
pub struct FieldColumn<T, V, C> {
    cell: C,
    extract: Box<dyn Fn(&T) -> V + Send + Sync>,
    styles: Option<String>,
}

impl<T, V, C: Cell<V>> FieldColumn<T, V, C> {
    pub fn new(cell: C, extract: impl Fn(&T) -> V + Send + Sync + 'static) -> Self {
        Self {
            cell,
            extract: Box::new(extract),
            styles: None,
        }
    }

    /// Set fixed per-cell style-class names for this column.
    pub fn with_cell_style_names(mut self, styles: impl Into<String>) -> Self {
        self.styles = Some(styles.into());
        self
    }
}

impl<T, V, C: Cell<V>> Column<T> for FieldColumn<T, V, C> {
    type Value = V;

    fn value(&self, row: &T) -> V {
        (self.extract)(row)
    }

    fn cell(&self) -> &dyn Cell<V> {
        &self.cell
    }

    fn cell_style_names(&self, _row: &T, _row_index: usize) -> Option<String> {
        self.styles.clone()
    }
}

/// Type-erased column operations for use in the table.
///
/// This trait allows [`CellTable`](crate::table::CellTable) to hold columns
/// of mixed value types without knowing each concrete `Value`.
pub trait AnyColumn<T>: Send + Sync {
    /// Extract the value for `row` and render it through the column's cell.
    fn render_cell(&self, row: &T, out: &mut SafeHtmlBuilder);

    /// Extra style-class names for this column's cells.
    fn cell_style_names(&self, row: &T, row_index: usize) -> Option<String>;
}

impl<T, C: Column<T>> AnyColumn<T> for C {
    fn render_cell(&self, row: &T, out: &mut SafeHtmlBuilder) {
        Column::render(self, row, out);
    }

    fn cell_style_names(&self, row: &T, row_index: usize) -> Option<String> {
        Column::cell_style_names(self, row, row_index)
    }
}

impl<T> std::fmt::Debug for dyn AnyColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AnyColumn")
    }
}
