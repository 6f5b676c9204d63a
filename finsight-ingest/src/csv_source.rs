//! Read bank-statement CSV exports into raw, already-split rows.
//!
//! No header detection happens here; the normalizer owns the header skip.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::normalizer::normalize_with;
use crate::types::{NormalizeOptions, Normalized};

/// Read every record of a CSV file as a row of text fields.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let rdr = csv_builder()
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    collect_rows(rdr).with_context(|| format!("reading {}", path.display()))
}

/// Read every record from any CSV source (stdin, in-memory buffers).
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    collect_rows(csv_builder().from_reader(reader))
}

/// Read and normalize a statement file in one step.
pub fn load_statement(path: impl AsRef<Path>, options: &NormalizeOptions) -> Result<Normalized> {
    let rows = read_rows(path)?;
    Ok(normalize_with(&rows, options))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).has_headers(false);
    builder
}

fn collect_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    // Undecodable bytes (Latin-1 exports) become U+FFFD instead of failing the read
    for result in rdr.byte_records() {
        let record = result.context("malformed CSV record")?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_keeps_header_and_quotes() {
        let data = "\
Date,Description,Amount,Category
2024-01-01,\"ACME, Inc payroll\",3000,Income
2024-01-05,Rent,-1200,Housing
";
        let rows = read_rows_from(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Date");
        assert_eq!(rows[1][1], "ACME, Inc payroll");
        assert_eq!(rows[2], vec!["2024-01-05", "Rent", "-1200", "Housing"]);
    }

    #[test]
    fn test_read_rows_flexible_lengths() {
        let data = "Date,Description,Amount,Category\n2024-01-05,Coffee,-4.50\n";
        let rows = read_rows_from(data.as_bytes()).unwrap();
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_read_rows_non_utf8_field() {
        let data: &[u8] = b"Date,Description,Amount,Category\n\
2024-01-01,Salary,3000,Income\n\
2024-01-05,Caf\xe9,-4.50,Food\n";
        let rows = read_rows_from(data).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][1], "Caf\u{FFFD}");
        assert_eq!(rows[2][2], "-4.50");

        let out = crate::normalize(&rows);
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[1].amount, 4.50);
        assert_eq!(out.dropped(), 0);
    }

    #[test]
    fn test_read_rows_missing_file() {
        let err = read_rows("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("opening"));
    }
}
