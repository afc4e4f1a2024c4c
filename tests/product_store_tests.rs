//! # Product Store Tests
//!
//! Cache behaviour of the spreadsheet-backed store: hits while the
//! modification time is unchanged, reloads when it changes, and empty
//! results (with the cache left intact) when reading fails.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

use zipukm::product::CellValue;
use zipukm::product_store::{read_products, ProductStore};
use zipukm::store_errors::StoreError;

fn timestamp(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn write_catalog(path: &Path, contents: &[u8], modified: SystemTime) {
    fs::write(path, contents).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(modified).unwrap();
}

#[test]
fn test_unchanged_mtime_returns_cached_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    write_catalog(&path, "id,name\n1,УРАЛ\n".as_bytes(), timestamp(1_700_000_000));

    let store = ProductStore::new(&path);
    let first = store.load();
    let second = store.load();

    assert_eq!(first.len(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_same_mtime_hides_content_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    let modified = timestamp(1_700_000_000);
    write_catalog(&path, "id,name\n1,УРАЛ\n".as_bytes(), modified);

    let store = ProductStore::new(&path);
    let first = store.load();

    // Content changes alone do not invalidate the cache
    write_catalog(&path, "id,name\n1,УРАЛ\n2,КамАЗ\n".as_bytes(), modified);
    let second = store.load();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 1);
}

#[test]
fn test_changed_mtime_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    write_catalog(&path, "id,name\n1,УРАЛ\n".as_bytes(), timestamp(1_700_000_000));

    let store = ProductStore::new(&path);
    let first = store.load();

    write_catalog(
        &path,
        "id,name\n1,УРАЛ\n2,КамАЗ\n".as_bytes(),
        timestamp(1_700_000_060),
    );
    let second = store.load();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].text("name"), "КамАЗ");
}

#[test]
fn test_failed_reload_returns_empty_and_keeps_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    let original = "id,name\n1,УРАЛ\n";
    write_catalog(&path, original.as_bytes(), timestamp(1_700_000_000));

    let store = ProductStore::new(&path);
    let first = store.load();

    // Invalid UTF-8 makes the CSV reader fail
    write_catalog(&path, b"id,name\n1,\xff\xfe\n", timestamp(1_700_000_060));
    assert!(store.load().is_empty());

    // Restoring the previous file and mtime hits the untouched cache
    write_catalog(&path, original.as_bytes(), timestamp(1_700_000_000));
    let restored = store.load();
    assert!(Arc::ptr_eq(&first, &restored));
}

#[test]
fn test_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = ProductStore::new(dir.path().join("price.xlsx"));

    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_workbook_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.xlsx");
    write_catalog(&path, b"this is not a zip archive", timestamp(1_700_000_000));

    assert!(matches!(read_products(&path), Err(StoreError::Workbook(_))));
    assert!(ProductStore::new(&path).load().is_empty());
}

#[test]
fn test_columns_are_normalised_and_missing_values_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    write_catalog(
        &path,
        "\u{FEFF} Артикул , NAME ,Cost\nA-1,Урал,\n,,\n".as_bytes(),
        timestamp(1_700_000_000),
    );

    let products = read_products(&path).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id(), "A-1");
    assert_eq!(products[0].text("name"), "Урал");
    assert_eq!(products[0].get("cost"), Some(&CellValue::Empty));
}

#[test]
fn test_empty_file_has_no_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    write_catalog(&path, b"", timestamp(1_700_000_000));

    assert!(matches!(read_products(&path), Err(StoreError::EmptySheet(_))));
}

#[tokio::test]
async fn test_async_load_shares_the_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("price.csv");
    write_catalog(&path, "id,name\n1,УРАЛ\n".as_bytes(), timestamp(1_700_000_000));

    let store = Arc::new(ProductStore::new(&path));
    let first = store.load_async().await;
    let second = store.load();

    assert!(Arc::ptr_eq(&first, &second));
}
