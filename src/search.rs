//! Free-text product search.

use crate::product::Product;

/// Columns a query is matched against
pub const SEARCH_FIELDS: [&str; 3] = ["name", "where", "status"];

/// Case-insensitive substring search over [`SEARCH_FIELDS`].
///
/// Matches keep their catalog order. Callers reject empty queries first
/// (see [`crate::dialogue::validate_search_query`]).
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            SEARCH_FIELDS
                .iter()
                .any(|field| product.text(field).to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::CellValue;

    fn product(name: &str, place: &str, status: &str) -> Product {
        Product::new()
            .with("name", CellValue::text(name))
            .with("where", CellValue::text(place))
            .with("status", CellValue::text(status))
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("УРАЛ 4320", "Лямино", "на ходу"),
            product("КамАЗ 5511", "Пермь", "на запчасти"),
            product("ЗИЛ 131", "Лямино", "требует ремонта"),
        ]
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let found = search(&catalog(), "урал");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("name"), "УРАЛ 4320");
    }

    #[test]
    fn test_status_only_match() {
        let found = search(&catalog(), "ЗАПЧАСТИ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("name"), "КамАЗ 5511");
    }

    #[test]
    fn test_matches_keep_order() {
        let found = search(&catalog(), "лямино");
        let names: Vec<String> = found.iter().map(|p| p.text("name")).collect();
        assert_eq!(names, vec!["УРАЛ 4320", "ЗИЛ 131"]);
    }

    #[test]
    fn test_numeric_cells_and_missing_fields() {
        let products = vec![
            Product::new().with("name", CellValue::Float(4320.0)),
            Product::new().with("cost", CellValue::text("4320")),
        ];
        let found = search(&products, "4320");
        assert_eq!(found.len(), 1);
        assert!(search(&catalog(), "belaz").is_empty());
    }
}
