//! Error types for table configuration.

use thiserror::Error;

/// Errors from table configuration operations.
///
/// Rendering and value extraction are total and have no error channel; only
/// structural mutation of the column list can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellViewError {
    /// Column index outside the current column list.
    #[error("column index {index} out of bounds (column count {len})")]
    ColumnIndexOutOfBounds { index: usize, len: usize },
}
