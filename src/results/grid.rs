/// Display-oriented result of a query: column headers plus rows of
/// pre-rendered cell text.
///
/// Every cell is stringified when the grid is built, regardless of its
/// column type. This is a lossy projection meant for direct display, not a
/// typed result set. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryGrid {
    /// Column names, in result order.
    pub headers: Vec<String>,
    /// Row cells, in result order; each row is as wide as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl QueryGrid {
    pub(crate) fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row. Callers must supply exactly one cell per header.
    pub(crate) fn push_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        self.rows.push(cells);
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
