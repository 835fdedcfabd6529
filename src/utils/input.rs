//! Input readers for the command line front end.

use crate::utils::error::{FormError, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads integers from headerless CSV, flattened row by row. Blank cells are
/// skipped and rows may have different widths.
pub fn parse_numbers_csv<R: Read>(reader: R) -> Result<Vec<i64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut numbers = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        for (column, cell) in record.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let number = cell.parse::<i64>().map_err(|e| FormError::InputError {
                message: format!(
                    "'{}' at row {}, column {} is not an integer: {}",
                    cell,
                    row + 1,
                    column + 1,
                    e
                ),
            })?;
            numbers.push(number);
        }
    }

    tracing::debug!("Parsed {} numbers from CSV", numbers.len());
    Ok(numbers)
}

pub fn read_numbers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let file = std::fs::File::open(&path)?;
    parse_numbers_csv(file)
}

pub fn parse_json(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = std::fs::read_to_string(&path)?;
    parse_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_flattens_rows() {
        let data = "34, 7, 23\n32,5\n62\n";
        let numbers = parse_numbers_csv(data.as_bytes()).unwrap();
        assert_eq!(numbers, vec![34, 7, 23, 32, 5, 62]);
    }

    #[test]
    fn test_parse_numbers_skips_blank_cells() {
        let data = "1,,2\n,3\n";
        assert_eq!(parse_numbers_csv(data.as_bytes()).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_numbers_rejects_text() {
        let err = parse_numbers_csv("1,two,3\n".as_bytes()).unwrap_err();
        match err {
            FormError::InputError { message } => {
                assert!(message.contains("'two'"));
                assert!(message.contains("row 1, column 2"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_keeps_field_order() {
        let value = parse_json(r#"{"b": 1, "a": 2}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(matches!(parse_json("{not json"), Err(FormError::JsonError(_))));
    }
}
