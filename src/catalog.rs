//! Catalog pagination.
//!
//! Pages are derived on every render; the page index only lives in the
//! navigation payloads produced from [`NavControl`].

use crate::product::Product;

/// Navigation control attached below a page of products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    /// Go back one page; carries the page being displayed
    Previous(usize),
    /// Return to the main menu
    Home,
    /// Go forward one page; carries the page being displayed
    Next(usize),
}

/// One rendered page of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: &'a [Product],
    pub page: usize,
    pub page_count: usize,
    pub controls: Vec<NavControl>,
}

impl CatalogPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.controls
            .iter()
            .any(|c| matches!(c, NavControl::Previous(_)))
    }

    pub fn has_next(&self) -> bool {
        self.controls.iter().any(|c| matches!(c, NavControl::Next(_)))
    }
}

/// Number of pages needed for `len` products
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice `products` into page `page` of `page_size` items.
///
/// "Previous" is offered iff `page > 0`, "home" always, "next" iff more
/// pages remain. A page past the end renders no items.
pub fn render(products: &[Product], page: usize, page_size: usize) -> CatalogPage<'_> {
    let page_size = page_size.max(1);
    let total_pages = page_count(products.len(), page_size);

    let start = page.saturating_mul(page_size).min(products.len());
    let end = start.saturating_add(page_size).min(products.len());

    let mut controls = Vec::with_capacity(3);
    if page > 0 {
        controls.push(NavControl::Previous(page));
    }
    controls.push(NavControl::Home);
    if page.saturating_add(1) < total_pages {
        controls.push(NavControl::Next(page));
    }

    CatalogPage {
        items: &products[start..end],
        page,
        page_count: total_pages,
        controls,
    }
}

/// Clamp a requested page into the existing range (page 0 for an empty catalog)
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.min(page_count(len, page_size).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::CellValue;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product::new().with("id", CellValue::Int(i as i64)))
            .collect()
    }

    #[test]
    fn test_first_page() {
        let list = products(15);
        let page = render(&list, 0, 7);

        assert_eq!(page.items.len(), 7);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.controls, vec![NavControl::Home, NavControl::Next(0)]);
    }

    #[test]
    fn test_middle_and_last_page() {
        let list = products(15);

        let middle = render(&list, 1, 7);
        assert_eq!(
            middle.controls,
            vec![NavControl::Previous(1), NavControl::Home, NavControl::Next(1)]
        );

        let last = render(&list, 2, 7);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id(), "14");
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_size_bound_for_many_shapes() {
        for len in 0..30 {
            for page_size in 1..12 {
                let list = products(len);
                let pages = page_count(len, page_size);
                for page in 0..pages.max(1) + 1 {
                    let rendered = render(&list, page, page_size);
                    assert!(rendered.items.len() <= page_size);
                    assert_eq!(rendered.has_previous(), page > 0);
                    assert_eq!(rendered.has_next(), page + 1 < pages);
                    assert!(rendered.controls.contains(&NavControl::Home));
                }
            }
        }
    }

    #[test]
    fn test_empty_catalog() {
        let page = render(&[], 0, 7);
        assert!(page.items.is_empty());
        assert_eq!(page.controls, vec![NavControl::Home]);
        assert_eq!(clamp_page(5, 0, 7), 0);
    }

    #[test]
    fn test_page_far_past_the_end() {
        let list = products(3);
        let page = render(&list, usize::MAX, 7);

        assert!(page.items.is_empty());
        assert_eq!(
            page.controls,
            vec![NavControl::Previous(usize::MAX), NavControl::Home]
        );
        assert_eq!(clamp_page(usize::MAX, 3, 7), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(9, 15, 7), 2);
        assert_eq!(clamp_page(1, 15, 7), 1);
        assert_eq!(page_count(14, 7), 2);
        assert_eq!(page_count(3, 0), 3);
    }
}
