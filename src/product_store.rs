//! # Product Store Module
//!
//! Loads the catalog spreadsheet and caches it keyed by the file's
//! modification time.
//!
//! # Cache Lifecycle
//!
//! - The first `load()` reads the file and stores the snapshot with its mtime
//! - Later calls return the same `Arc` while the mtime is unchanged
//! - A changed mtime triggers a full re-read and replaces the snapshot
//! - A failed read returns an empty list and leaves the cache untouched

use calamine::{open_workbook_auto, Data, DataType, Reader};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;
use tracing::{debug, error, info, warn};

use crate::product::{CellValue, Product};
use crate::store_errors::StoreError;

struct CatalogSnapshot {
    products: Arc<Vec<Product>>,
    modified: SystemTime,
}

/// Spreadsheet-backed product list with modification-time invalidation
pub struct ProductStore {
    path: PathBuf,
    cache: Mutex<Option<CatalogSnapshot>>,
}

impl ProductStore {
    /// Create a store for the given spreadsheet. Nothing is read until `load()`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current product list.
    ///
    /// Returns the cached snapshot while the backing file's modification time
    /// matches the last successful load. Never returns partially-read data:
    /// every failure degrades to an empty list.
    pub fn load(&self) -> Arc<Vec<Product>> {
        let modified = match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Catalog file is not available");
                return Arc::new(Vec::new());
            }
        };

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(snapshot) = cache.as_ref() {
            if snapshot.modified == modified {
                debug!(products = snapshot.products.len(), "Serving cached catalog");
                return Arc::clone(&snapshot.products);
            }
        }

        match read_products(&self.path) {
            Ok(products) => {
                info!(
                    path = %self.path.display(),
                    products = products.len(),
                    modified = %chrono::DateTime::<chrono::Local>::from(modified).format("%Y-%m-%d %H:%M:%S"),
                    "Catalog loaded"
                );
                let products = Arc::new(products);
                *cache = Some(CatalogSnapshot {
                    products: Arc::clone(&products),
                    modified,
                });
                products
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read catalog");
                Arc::new(Vec::new())
            }
        }
    }

    /// Run [`ProductStore::load`] on the blocking pool
    pub async fn load_async(self: &Arc<Self>) -> Arc<Vec<Product>> {
        let store = Arc::clone(self);
        match tokio::task::spawn_blocking(move || store.load()).await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Catalog loading task failed");
                Arc::new(Vec::new())
            }
        }
    }
}

/// Read every product row of a spreadsheet.
///
/// `.csv` files go through the csv reader; everything else is handed to
/// calamine, which picks the format from the extension.
pub fn read_products(path: &Path) -> Result<Vec<Product>, StoreError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let rows = if is_csv {
        read_csv_rows(path)?
    } else {
        read_workbook_rows(path)?
    };

    rows_to_products(rows).ok_or_else(|| StoreError::EmptySheet(path.display().to_string()))
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<CellValue>>, StoreError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| StoreError::EmptySheet(path.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(workbook_cell).collect())
        .collect())
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| CellValue::Text(date.format("%d.%m.%Y").to_string()))
            .unwrap_or_else(|| CellValue::text(cell.to_string())),
        Data::DurationIso(s) => CellValue::text(s.clone()),
    }
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<CellValue>>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| CellValue::text(field.trim_start_matches('\u{FEFF}')))
                .collect(),
        );
    }
    Ok(rows)
}

/// Turn raw rows into products using the first row as the header.
///
/// Column names are trimmed and lowercased; columns without a name are
/// dropped, short rows are padded with empty cells and blank rows skipped.
/// Returns `None` when there is no header row.
pub fn rows_to_products(rows: Vec<Vec<CellValue>>) -> Option<Vec<Product>> {
    let mut rows = rows.into_iter();
    let header: Vec<String> = rows
        .next()?
        .iter()
        .map(|cell| cell.to_string().trim().to_lowercase())
        .collect();

    let products = rows
        .map(|row| {
            let mut cells = row.into_iter();
            let mut product = Product::new();
            for column in &header {
                let value = cells.next().unwrap_or_default();
                if !column.is_empty() {
                    product.insert(column.clone(), value);
                }
            }
            product
        })
        .filter(|product| !product.is_blank())
        .collect();

    Some(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::text(*c)).collect()
    }

    #[test]
    fn test_header_normalisation() {
        let rows = vec![
            text_row(&[" Name ", "WHERE", "Артикул"]),
            text_row(&["УРАЛ 4320", "Лямино", "17"]),
        ];
        let products = rows_to_products(rows).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].text("name"), "УРАЛ 4320");
        assert_eq!(products[0].text("where"), "Лямино");
        assert_eq!(products[0].id(), "17");
    }

    #[test]
    fn test_short_and_blank_rows() {
        let rows = vec![
            text_row(&["name", "cost", ""]),
            text_row(&["КамАЗ"]),
            text_row(&["", "", ""]),
        ];
        let products = rows_to_products(rows).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].get("cost"), Some(&CellValue::Empty));
        assert_eq!(products[0].columns().count(), 2);
    }

    #[test]
    fn test_no_header() {
        assert!(rows_to_products(Vec::new()).is_none());
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let store = ProductStore::new("/definitely/not/here/price.xlsx");
        assert!(store.load().is_empty());
    }
}
