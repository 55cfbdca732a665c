//! Reference lists taken from Gherkin data tables.
//!
//! List steps receive a table whose first row names the columns:
//!
//! ```text
//! | itemName     |
//! | Test value 1 |
//! | Test value 2 |
//! ```
//!
//! [`table_to_rows`] returns one column's values in row order.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while extracting a reference column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DataTableError {
    /// The table has no rows, so there is no header to search.
    #[error("data table requires a header row")]
    MissingHeader,
    /// The header row repeats a column name.
    #[error("data table header contains duplicate column '{column}'")]
    DuplicateHeader {
        /// Repeated column name.
        column: String,
    },
    /// The requested column is not in the header.
    #[error("data table has no column '{column}' (columns: {available:?})")]
    MissingColumn {
        /// Name of the column that was requested.
        column: String,
        /// Columns declared by the header.
        available: Vec<String>,
    },
    /// A data row is shorter than the header.
    #[error("data table row {row_number} is missing cell {column_index}")]
    MissingCell {
        /// 1-based index of the row, counting the header.
        row_number: usize,
        /// 1-based index of the missing column.
        column_index: usize,
    },
}

/// Rows of a step data table, header first.
///
/// # Examples
///
/// ```
/// use rstest_bdd_ui::{ReferenceTable, table_to_rows};
///
/// let table = ReferenceTable::new(vec![
///     vec!["itemName".into()],
///     vec!["Inbox".into()],
///     vec!["Sent".into()],
/// ]);
/// assert_eq!(table_to_rows(&table, "itemName").unwrap(), ["Inbox", "Sent"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    rows: Vec<Vec<String>>,
}

impl ReferenceTable {
    /// Wrap a row matrix as produced by `rstest-bdd` for `datatable`
    /// arguments.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows including the header.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns `true` when the table has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for ReferenceTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

impl From<&gherkin::Table> for ReferenceTable {
    fn from(table: &gherkin::Table) -> Self {
        Self::new(table.rows.clone())
    }
}

/// Column names of the header row.
struct Header<'t> {
    columns: &'t [String],
    index: HashMap<&'t str, usize>,
}

impl<'t> Header<'t> {
    fn new(columns: &'t [String]) -> Result<Self, DataTableError> {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if index.insert(column.as_str(), position).is_some() {
                return Err(DataTableError::DuplicateHeader {
                    column: column.clone(),
                });
            }
        }
        Ok(Self { columns, index })
    }

    fn require(&self, name: &str) -> Result<usize, DataTableError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DataTableError::MissingColumn {
                column: name.to_string(),
                available: self.columns.to_vec(),
            })
    }
}

/// Extract the values of `column` from every data row, in row order.
///
/// # Errors
///
/// Returns [`DataTableError::MissingHeader`] for an empty table,
/// [`DataTableError::DuplicateHeader`] or [`DataTableError::MissingColumn`]
/// when the header cannot identify the column, and
/// [`DataTableError::MissingCell`] when a row is too short.
pub fn table_to_rows(table: &ReferenceTable, column: &str) -> Result<Vec<String>, DataTableError> {
    let Some((header_row, data_rows)) = table.rows.split_first() else {
        return Err(DataTableError::MissingHeader);
    };
    let position = Header::new(header_row)?.require(column)?;
    data_rows
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            row.get(position)
                .cloned()
                .ok_or(DataTableError::MissingCell {
                    row_number: offset + 2,
                    column_index: position + 1,
                })
        })
        .collect()
}
