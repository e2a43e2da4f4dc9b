use std::collections::HashMap;

/// A row-oriented table with named columns, as loaded from a TSV file.
///
/// Cells are stored as raw strings; an empty cell means "missing" and is
/// surfaced as `None` by [`Table::cell`]. Column names are unique — when a
/// header repeats a name, the first occurrence wins for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Append a data row. The caller is responsible for ensuring the row has
    /// exactly one cell per column (the TSV parser enforces this).
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Look up one cell by row index and column index.
    /// Returns `None` for an empty (missing) cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let value = self.rows.get(row)?.get(col)?;
        if value.is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }

    /// Look up one cell by row index and column name.
    #[must_use]
    pub fn cell_by_name(&self, row: usize, name: &str) -> Option<&str> {
        self.cell(row, self.column_index(name)?)
    }
}
