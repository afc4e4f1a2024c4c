//! Photo path resolution for product images.

use std::path::{Path, PathBuf};

use crate::config::IMAGE_EXTENSIONS;
use crate::product::Product;

/// Resolve one image reference to an existing file.
///
/// The literal path wins; otherwise each of [`IMAGE_EXTENSIONS`] is appended
/// to the reference in turn. Relative references are joined onto `root`.
pub fn resolve_photo(reference: &str, root: Option<&Path>) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    let base = match root {
        Some(root) if Path::new(reference).is_relative() => root.join(reference),
        _ => PathBuf::from(reference),
    };

    if base.is_file() {
        return Some(base);
    }

    IMAGE_EXTENSIONS.iter().find_map(|ext| {
        let mut candidate = base.clone().into_os_string();
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        candidate.is_file().then_some(candidate)
    })
}

/// Resolve up to three photos of a product, skipping unresolvable ones
pub fn resolve_photo_paths(product: &Product, root: Option<&Path>) -> Vec<PathBuf> {
    product
        .image_refs()
        .iter()
        .filter_map(|reference| resolve_photo(reference, root))
        .collect()
}
