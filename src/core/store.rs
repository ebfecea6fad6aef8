//! Quantity table persistence
//!
//! The quantities file (`Ingredient,qt,unit`) is the only mutable data in a
//! pantry. Inventory operations take a [`QuantityStore`] so they can run
//! against the CSV file or against an in-memory table.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::error::{PantryError, Result};
use crate::core::names::normalize;

/// One row of the quantities file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRow {
    #[serde(rename = "Ingredient")]
    pub ingredient: String,

    /// Running total, never negative
    pub qt: f64,

    #[serde(default)]
    pub unit: Option<String>,
}

impl QuantityRow {
    pub fn new(ingredient: impl Into<String>, qt: f64, unit: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.into(),
            qt,
            unit: unit.map(str::to_string),
        }
    }

    /// Unit with blanks treated as absent
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// The full quantities table, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityTable {
    rows: Vec<QuantityRow>,
}

impl QuantityTable {
    pub fn new(rows: Vec<QuantityRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[QuantityRow] {
        &self.rows
    }

    /// Position of the row whose ingredient matches `name` after normalization
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = normalize(name);
        self.rows.iter().position(|r| normalize(&r.ingredient) == key)
    }

    pub fn get(&self, name: &str) -> Option<&QuantityRow> {
        self.position(name).map(|idx| &self.rows[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut QuantityRow> {
        self.position(name).map(move |idx| &mut self.rows[idx])
    }

    /// Parse the quantities CSV format
    pub fn from_reader<R: Read>(path: &Path, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in rdr.deserialize::<QuantityRow>() {
            rows.push(result.map_err(|e| PantryError::csv(path, e))?);
        }
        Ok(Self { rows })
    }

    /// Serialize in the quantities CSV format; the header is written even
    /// when there are no rows
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(["Ingredient", "qt", "unit"])
            .map_err(|e| PantryError::csv("<quantities>", e))?;
        for row in &self.rows {
            wtr.serialize(row)
                .map_err(|e| PantryError::csv("<quantities>", e))?;
        }
        wtr.into_inner()
            .map_err(|e| PantryError::io("<quantities>", e.into_error()))
    }
}

/// Load/save access to the quantities table
pub trait QuantityStore {
    fn load(&self) -> Result<QuantityTable>;

    /// Replace the stored table with `table` in one write
    fn save(&self, table: &QuantityTable) -> Result<()>;
}

/// Quantities kept in a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvQuantityStore {
    path: PathBuf,
}

impl CsvQuantityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuantityStore for CsvQuantityStore {
    fn load(&self) -> Result<QuantityTable> {
        let file = File::open(&self.path).map_err(|e| PantryError::io(&self.path, e))?;
        let table = QuantityTable::from_reader(&self.path, BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), rows = table.rows.len(), "loaded quantities");
        Ok(table)
    }

    fn save(&self, table: &QuantityTable) -> Result<()> {
        let bytes = table.to_csv()?;

        // Whole-file overwrite via a sibling temp file so readers never see
        // a half-written table.
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        fs::write(&tmp, bytes).map_err(|e| PantryError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PantryError::io(&self.path, e))?;

        tracing::info!(path = %self.path.display(), rows = table.rows.len(), "saved quantities");
        Ok(())
    }
}

/// Quantities held in memory; `save` replaces the held table
#[derive(Debug, Default)]
pub struct MemoryQuantityStore {
    table: RefCell<QuantityTable>,
}

impl MemoryQuantityStore {
    pub fn new(table: QuantityTable) -> Self {
        Self {
            table: RefCell::new(table),
        }
    }

    /// Current contents
    pub fn snapshot(&self) -> QuantityTable {
        self.table.borrow().clone()
    }
}

impl QuantityStore for MemoryQuantityStore {
    fn load(&self) -> Result<QuantityTable> {
        Ok(self.table.borrow().clone())
    }

    fn save(&self, table: &QuantityTable) -> Result<()> {
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "Ingredient,qt,unit\nEgg,2,\nSpaghetti,500.5,g\n";

    #[test]
    fn test_parse_quantities() {
        let table = QuantityTable::from_reader(Path::new("q.csv"), SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], QuantityRow::new("Egg", 2.0, None));
        assert_eq!(table.rows()[1].unit(), Some("g"));
        assert_eq!(table.rows()[1].qt, 500.5);
    }

    #[test]
    fn test_lookup_is_normalized() {
        let table = QuantityTable::from_reader(Path::new("q.csv"), SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.position("egg"), Some(0));
        assert_eq!(table.position("SPAGHETTI [dry]"), Some(1));
        assert_eq!(table.position("Penne"), None);
    }

    #[test]
    fn test_non_numeric_total_is_csv_error() {
        let data = "Ingredient,qt,unit\nEgg,lots,\n";
        let err = QuantityTable::from_reader(Path::new("q.csv"), data.as_bytes()).unwrap_err();
        assert!(matches!(err, PantryError::Csv { .. }));
    }

    #[test]
    fn test_csv_store_save_then_load() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("quantities.csv");
        fs::write(&path, SAMPLE).unwrap();

        let store = CsvQuantityStore::new(&path);
        let mut table = store.load().unwrap();
        table.get_mut("egg").unwrap().qt = 6.0;
        store.save(&table).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.get("Egg").unwrap().qt, 6.0);
        assert_eq!(reloaded.get("Spaghetti").unwrap().unit(), Some("g"));
        assert!(!tmp.path().join("quantities.csv.tmp").exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Ingredient,qt,unit"));
    }

    #[test]
    fn test_header_survives_empty_table() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("quantities.csv");
        fs::write(&path, "Ingredient,qt,unit\n").unwrap();

        let store = CsvQuantityStore::new(&path);
        let table = store.load().unwrap();
        assert!(table.rows().is_empty());
        store.save(&table).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Ingredient,qt,unit\n");
        assert!(store.load().unwrap().rows().is_empty());
    }

    #[test]
    fn test_memory_store_replaces_table() {
        let store = MemoryQuantityStore::new(QuantityTable::new(vec![QuantityRow::new(
            "Egg", 1.0, None,
        )]));
        store
            .save(&QuantityTable::new(vec![QuantityRow::new("Egg", 3.0, None)]))
            .unwrap();
        assert_eq!(store.load().unwrap().get("Egg").unwrap().qt, 3.0);
    }
}
