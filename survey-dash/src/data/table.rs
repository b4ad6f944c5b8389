//! The respondent table: loosely typed rows addressed by column name.

use std::{collections::HashMap, io::Read};

use crate::error::{Error, Result};

/// Cell markers treated as missing, matching common CSV readers.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Returns true if the raw cell counts as a missing value.
pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// Parses a cell as a number, `None` for missing or non-numeric text.
pub fn parse_number(cell: &str) -> Option<f64> {
    if is_missing(cell) {
        return None;
    }
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// In-memory survey table.
///
/// Never mutated after loading; charts only derive read-only views.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Builds a table from headers and rows. Short rows are padded with
    /// empty (missing) cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, String::new());
                r
            })
            .collect();
        Self {
            headers,
            rows,
            index,
        }
    }

    /// Parses CSV text with a header row.
    ///
    /// Short rows are padded with missing cells; a row with more fields than
    /// the header is a parse error.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(Error::RaggedRow {
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(Self::new(headers, rows))
    }

    /// Number of respondent rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<Column<'_>> {
        self.index
            .get(name)
            .map(|&idx| Column {
                name: &self.headers[idx],
                idx,
                rows: &self.rows,
            })
            .ok_or_else(|| Error::MissingColumn(name.to_owned()))
    }

    /// First `n` rows, for previews.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

/// Borrowed view over one column.
#[derive(Clone, Copy)]
pub struct Column<'a> {
    name: &'a str,
    idx: usize,
    rows: &'a [Vec<String>],
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Raw cells, one per row.
    pub fn cells(&self) -> impl Iterator<Item = &'a str> + 'a {
        let idx = self.idx;
        self.rows.iter().map(move |r| r[idx].as_str())
    }

    /// Cells as categories, `None` where missing.
    pub fn categories(&self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.cells()
            .map(|c| if is_missing(c) { None } else { Some(c.trim()) })
    }

    /// Cells as numbers, `None` where missing or non-numeric.
    pub fn numbers(&self) -> impl Iterator<Item = Option<f64>> + 'a {
        self.cells().map(parse_number)
    }

    /// Present numeric values only.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.numbers().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "age_midpoint,marital_status,smoking\n\
                       22.5,Not Married,Yes\n\
                       ,Married,No\n\
                       30,NA\n";

    #[test]
    fn test_from_csv_pads_short_rows() {
        let table = Table::from_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.headers().len(), 3);

        let smoking: Vec<_> = table.column("smoking").unwrap().categories().collect();
        assert_eq!(smoking, vec![Some("Yes"), Some("No"), None]);
    }

    #[test]
    fn test_long_row_is_a_parse_error() {
        let err = Table::from_csv("a,b\n1,2\n3,4,5\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
        assert!(err.is_data_source());
        assert_eq!(err.to_string(), "CSV parse error: line 3 has 3 fields, header has 2");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let table = Table::from_csv(CSV.as_bytes()).unwrap();
        let err = table.column("religion").err().unwrap();
        assert_eq!(err.missing_column(), Some("religion"));
    }

    #[test]
    fn test_numeric_view_skips_missing() {
        let table = Table::from_csv(CSV.as_bytes()).unwrap();
        let ages = table.column("age_midpoint").unwrap().numeric_values();
        assert_eq!(ages, vec![22.5, 30.0]);
        assert_eq!(
            table.column("marital_status").unwrap().categories().nth(2),
            Some(None)
        );
    }

    #[test]
    fn test_empty_table() {
        assert!(Table::default().is_empty());
        let header_only = Table::from_csv("a,b\n".as_bytes()).unwrap();
        assert!(header_only.is_empty());
        assert!(header_only.column("a").is_ok());
    }

    #[test]
    fn test_head_is_bounded() {
        let table = Table::from_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(50).len(), 3);
    }
}
