//! Decoding of the generator's tab-separated output table.
//!
//! The table carries one header row of column labels followed by one row per
//! generated case. A cell may arrive with a single leading negative-marker
//! character, which is stripped before any lookup. In the identifier-mapped
//! API every cell is a value identifier resolved back through the identity
//! map; in string mode the cells are the values themselves and the header
//! labels are the parameter keys.

use crate::idmap::ValuesIdMap;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The generator returned an identifier this pass never issued: a
    /// protocol mismatch between what was sent and what came back.
    #[error("generator returned unknown identifier '{0}'")]
    UnknownId(String),
}

/// One decoded test case: parameter key → value, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Case<V> {
    entries: Vec<(String, V)>,
}

impl<V> Case<V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push(&mut self, key: String, value: V) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Header labels and data cells of the raw output table. The trailing blank
/// line emitted by the generator disappears with line splitting.
fn table(raw: &str) -> (Vec<&str>, Vec<Vec<&str>>) {
    let mut lines = raw.lines();
    let headers = match lines.next() {
        Some(line) => line.split('\t').collect(),
        None => Vec::new(),
    };
    let rows = lines
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').collect())
        .collect();
    (headers, rows)
}

fn strip_marker(cell: &str, negative_prefix: char) -> &str {
    cell.strip_prefix(negative_prefix).unwrap_or(cell)
}

/// Decodes identifier-mapped output: every cell is resolved through the
/// identity map, restoring the original value under the original parameter
/// key.
pub fn decode_cases<V: Clone + PartialEq>(
    raw: &str,
    map: &ValuesIdMap<V>,
    negative_prefix: char,
) -> Result<Vec<Case<V>>, DecodeError> {
    let (_, rows) = table(raw);
    let mut cases = Vec::with_capacity(rows.len());
    for row in rows {
        let mut case = Case::new();
        for cell in row {
            let id = strip_marker(cell, negative_prefix);
            let resolved = map
                .value_by_id(id)
                .map_err(|_| DecodeError::UnknownId(id.to_string()))?;
            case.push(resolved.parameter_key.to_string(), resolved.value.clone());
        }
        cases.push(case);
    }
    Ok(cases)
}

/// Decodes string-mode output: header labels are the parameter keys and the
/// marker-stripped cells are the values, no reverse mapping involved.
pub fn decode_string_cases(raw: &str, negative_prefix: char) -> Vec<Case<String>> {
    let (headers, rows) = table(raw);
    let mut cases = Vec::with_capacity(rows.len());
    for row in rows {
        let mut case = Case::new();
        for (index, cell) in row.iter().enumerate() {
            let key = headers.get(index).copied().unwrap_or_default();
            case.push(
                key.to_string(),
                strip_marker(cell, negative_prefix).to_string(),
            );
        }
        cases.push(case);
    }
    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_map() -> ValuesIdMap<Value> {
        let mut map = ValuesIdMap::new();
        map.add("A", "0", json!(1), "0.0".into()).unwrap();
        map.add("A", "0", json!(2), "0.1".into()).unwrap();
        map.add("B", "1", json!("x"), "1.0".into()).unwrap();
        map.add("B", "1", json!(null), "1.1".into()).unwrap();
        map
    }

    #[test]
    fn test_decode_restores_typed_values() {
        let map = sample_map();
        let raw = "0\t1\n0.0\t1.0\n0.1\t1.1\n";
        let cases = decode_cases(raw, &map, '~').unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].get("A"), Some(&json!(1)));
        assert_eq!(cases[0].get("B"), Some(&json!("x")));
        assert_eq!(cases[1].get("A"), Some(&json!(2)));
        assert_eq!(cases[1].get("B"), Some(&json!(null)));
    }

    #[test]
    fn test_decode_strips_negative_marker() {
        let map = sample_map();
        let raw = "0\t1\n~0.0\t1.1\n";
        let cases = decode_cases(raw, &map, '~').unwrap();
        assert_eq!(cases[0].get("A"), Some(&json!(1)));
    }

    #[test]
    fn test_decode_unknown_id_fails() {
        let map = sample_map();
        let raw = "0\t1\n0.0\t9.9\n";
        let err = decode_cases(raw, &map, '~').unwrap_err();
        assert!(matches!(err, DecodeError::UnknownId(id) if id == "9.9"));
    }

    #[test]
    fn test_decode_empty_output() {
        let map = sample_map();
        assert!(decode_cases("", &map, '~').unwrap().is_empty());
        assert!(decode_cases("0\t1\n", &map, '~').unwrap().is_empty());
    }

    #[test]
    fn test_decode_string_cases_uses_header_keys() {
        let raw = "color\tsize\nred\tsmall\nblue\t~large\n";
        let cases = decode_string_cases(raw, '~');
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].get("color").map(String::as_str), Some("red"));
        assert_eq!(cases[1].get("size").map(String::as_str), Some("large"));
    }

    #[test]
    fn test_decode_string_cases_custom_prefix() {
        let raw = "k\n!v\n";
        let cases = decode_string_cases(raw, '!');
        assert_eq!(cases[0].get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_marker_stripped_once_only() {
        let raw = "k\n~~v\n";
        let cases = decode_string_cases(raw, '~');
        assert_eq!(cases[0].get("k").map(String::as_str), Some("~v"));
    }
}
