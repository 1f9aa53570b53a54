//! Seed text rendering.
//!
//! The generator's seed file is a tab-separated table: a header line naming
//! every column seen across all rows, then one line per row. Rows are
//! partial test cases, so a row simply leaves the cell blank for any column
//! it does not pin.

use crate::model::BuildError;

/// Accumulates identifier-keyed (or key-keyed, in string mode) seed rows.
#[derive(Debug, Default)]
pub struct SeedBuilder {
    /// Distinct column keys in first-seen order.
    keys: Vec<String>,
    rows: Vec<Vec<(String, String)>>,
}

impl SeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row: a non-empty list of (column key, token) pairs.
    pub fn add(&mut self, row: Vec<(String, String)>) -> Result<(), BuildError> {
        if row.is_empty() {
            return Err(BuildError::EmptySeedRow);
        }
        for (key, _) in &row {
            if !self.keys.contains(key) {
                self.keys.push(key.clone());
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the header plus one ragged line per row.
    pub fn render(&self) -> String {
        let mut text = self.keys.join("\t");
        for row in &self.rows {
            text.push('\n');
            for (index, key) in self.keys.iter().enumerate() {
                if index > 0 {
                    text.push('\t');
                }
                if let Some((_, token)) = row.iter().find(|(k, _)| k == key) {
                    text.push_str(token);
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row_rejected() {
        let mut builder = SeedBuilder::new();
        assert!(matches!(
            builder.add(vec![]),
            Err(BuildError::EmptySeedRow)
        ));
    }

    #[test]
    fn test_single_row() {
        let mut builder = SeedBuilder::new();
        builder
            .add(vec![("0".into(), "0.0".into()), ("1".into(), "1.1".into())])
            .unwrap();
        assert_eq!(builder.render(), "0\t1\n0.0\t1.1");
    }

    #[test]
    fn test_ragged_rows_leave_blank_cells() {
        let mut builder = SeedBuilder::new();
        builder.add(vec![("0".into(), "0.0".into())]).unwrap();
        builder
            .add(vec![("1".into(), "1.0".into()), ("2".into(), "2.1".into())])
            .unwrap();
        // Header is the union of keys; the first row pins only column 0.
        assert_eq!(builder.render(), "0\t1\t2\n0.0\t\t\n\t1.0\t2.1");
    }

    #[test]
    fn test_header_keeps_first_seen_order() {
        let mut builder = SeedBuilder::new();
        builder.add(vec![("b".into(), "2".into())]).unwrap();
        builder
            .add(vec![("a".into(), "1".into()), ("b".into(), "3".into())])
            .unwrap();
        assert_eq!(builder.render(), "b\ta\n2\t\n3\t1");
    }
}
