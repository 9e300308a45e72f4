//! Per-row style-class providers.

/// Computes extra style-class names for a row.
///
/// Pure: must not mutate the row or any table state. Called once per row per
/// render pass. The returned string is a space-separated class list with no
/// leading or trailing whitespace; `None` means "apply no extra classes".
///
/// The table combines this result with its own base styling; a provider must
/// not assume exclusive control over the row's classes.
pub trait RowStyles<T>: Send + Sync {
    fn style_names(&self, row: &T, row_index: usize) -> Option<String>;
}

impl<T, F> RowStyles<T> for F
where
    F: Fn(&T, usize) -> Option<String> + Send + Sync,
{
    fn style_names(&self, row: &T, row_index: usize) -> Option<String> {
        self(row, row_index)
    }
}
