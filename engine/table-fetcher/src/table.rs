//! Plain string table shared across pipeline stages

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A row/column structure of strings extracted from one HTML table.
///
/// Every cell is a trimmed string; the header row becomes `headers`. Missing
/// values are represented by the empty string until the cleaning stage types
/// the columns. Each pipeline stage that transforms a `Table` produces a new
/// one rather than mutating its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in document order
    pub headers: Vec<String>,
    /// Data rows; each row holds one cell per header (short rows are padded
    /// by the producer)
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header row and data rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a named column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at (row, column-name); `None` when the column is absent or
    /// the row is shorter than the header
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Fail fast with [`ParseError::MissingColumns`] unless every named
    /// column is present in the header.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), ParseError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|n| self.column_index(n).is_none())
            .map(|n| n.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ParseError::MissingColumns { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["Rk".into(), "Player".into(), "MP".into()],
            vec![
                vec!["1".into(), "Alice Guard".into(), "34.2".into()],
                vec!["2".into(), "Bob Center".into(), "12.0".into()],
            ],
        )
    }

    #[test]
    fn test_column_index_and_cell() {
        let t = sample();
        assert_eq!(t.column_index("MP"), Some(2));
        assert_eq!(t.column_index("AST"), None);
        assert_eq!(t.cell(0, "Player"), Some("Alice Guard"));
        assert_eq!(t.cell(1, "MP"), Some("12.0"));
        assert_eq!(t.cell(2, "MP"), None);
        assert_eq!(t.cell(0, "AST"), None);
    }

    #[test]
    fn test_require_columns() {
        let t = sample();
        assert!(t.require_columns(&["Rk", "Player"]).is_ok());

        let err = t.require_columns(&["Player", "AST", "TRB"]).unwrap_err();
        match err {
            ParseError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["AST".to_string(), "TRB".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cell_on_short_row() {
        let t = Table::new(
            vec!["A".into(), "B".into()],
            vec![vec!["only".into()]],
        );
        assert_eq!(t.cell(0, "A"), Some("only"));
        assert_eq!(t.cell(0, "B"), None);
    }
}
