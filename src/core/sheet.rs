//! Header-addressed CSV tables
//!
//! The catalog, recipe and base-group files are "wide" tables whose column
//! count varies by file, so they are read as plain string grids rather than
//! deserialized into structs.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::error::{PantryError, Result};

/// One data row with its 1-indexed line number in the source file
#[derive(Debug, Clone)]
pub struct SheetRow {
    pub line: u64,
    cells: Vec<String>,
}

impl SheetRow {
    /// Cell at `idx`, or `None` if the row is short or the cell is blank
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.cells
            .get(idx)
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    /// All cells after `idx`, blanks included
    pub fn cells_from(&self, idx: usize) -> &[String] {
        self.cells.get(idx..).unwrap_or(&[])
    }
}

/// A CSV file held in memory as a header row plus string rows
#[derive(Debug, Clone)]
pub struct Sheet {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<SheetRow>,
}

impl Sheet {
    /// Read a whole CSV file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PantryError::io(path, e))?;
        Self::from_reader(path, BufReader::new(file))
    }

    /// Read CSV data from any reader; `path` is only used in error messages
    pub fn from_reader<R: Read>(path: impl Into<PathBuf>, reader: R) -> Result<Self> {
        let path = path.into();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| PantryError::csv(&path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PantryError::csv(&path, e))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            rows.push(SheetRow {
                line,
                cells: record.iter().map(str::to_string).collect(),
            });
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded sheet");
        Ok(Self {
            path,
            headers,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Non-blank cells of one column, top to bottom
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_are_accepted() {
        let data = "A,B,C\n1,2\n3,,5\n";
        let sheet = Sheet::from_reader("mem.csv", data.as_bytes()).unwrap();

        assert_eq!(sheet.headers(), &["A", "B", "C"]);
        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(sheet.rows()[0].get(2), None);
        assert_eq!(sheet.rows()[1].get(1), None);
        assert_eq!(sheet.rows()[1].get(2), Some("5"));
    }

    #[test]
    fn test_column_skips_blanks() {
        let data = "Long,Short\nSpaghetti,Penne\n,Fusilli\nLinguine,\n";
        let sheet = Sheet::from_reader("mem.csv", data.as_bytes()).unwrap();

        let long: Vec<_> = sheet.column(0).collect();
        let short: Vec<_> = sheet.column(1).collect();
        assert_eq!(long, vec!["Spaghetti", "Linguine"]);
        assert_eq!(short, vec!["Penne", "Fusilli"]);
    }

    #[test]
    fn test_row_lines_count_header() {
        let sheet = Sheet::from_reader("mem.csv", "h\na\nb\n".as_bytes()).unwrap();
        assert_eq!(sheet.rows()[0].line, 2);
        assert_eq!(sheet.rows()[1].line, 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Sheet::open(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, PantryError::Io { .. }));
    }
}
