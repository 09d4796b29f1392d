use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::*;

/// Stands in for a blocked cell in every serialized grid.
pub const BLOCKED_MARKER: &str = "-";

/// Serialized snapshot of the player's entries, one string per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressGrid {
    rows: Vec<Vec<String>>,
}

impl ProgressGrid {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Leniently parses a stored payload. Only the outer shape is required to be an array;
    /// rows that are not arrays read as empty and non-string entries read as empty cells.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|_| CrosswordError::MalformedProgress)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(rows) = value else {
            return Err(CrosswordError::MalformedProgress);
        };

        let rows = rows
            .iter()
            .map(|row| match row {
                Value::Array(entries) => entries
                    .iter()
                    .map(|entry| entry.as_str().map(String::from).unwrap_or_default())
                    .collect(),
                _ => Vec::new(),
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn entry(&self, (row, col): Coord2) -> Option<&str> {
        self.rows
            .get(usize::from(row))?
            .get(usize::from(col))
            .map(String::as_str)
    }

    /// Value to put back into an input at `coords`, if the payload holds a non-empty one.
    pub fn restored_value(&self, coords: Coord2) -> Option<String> {
        self.entry(coords)
            .filter(|entry| !entry.is_empty())
            .map(str::to_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn parse_rejects_non_sequences() {
        assert_eq!(
            ProgressGrid::parse("{\"a\": 1}"),
            Err(CrosswordError::MalformedProgress)
        );
        assert_eq!(
            ProgressGrid::parse("not json"),
            Err(CrosswordError::MalformedProgress)
        );
        assert!(ProgressGrid::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_tolerates_bad_rows_and_entries() {
        let progress = ProgressGrid::parse(r#"[["a", null, "-"], 3, ["", "b"]]"#).unwrap();
        assert_eq!(progress.entry((0, 0)), Some("a"));
        assert_eq!(progress.entry((0, 1)), Some(""));
        assert_eq!(progress.entry((1, 0)), None);
        assert_eq!(progress.entry((9, 9)), None);
        assert_eq!(progress.restored_value((2, 1)).as_deref(), Some("B"));
        assert_eq!(progress.restored_value((2, 0)), None);
    }

    #[test]
    fn serializes_as_plain_nested_arrays() {
        let progress = ProgressGrid::from_rows(vec![
            vec![String::from("A"), String::from(BLOCKED_MARKER)],
            vec![String::new(), String::from("D")],
        ]);
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"[["A","-"],["","D"]]"#);
    }
}
