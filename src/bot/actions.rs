//! Callback payloads carried by inline keyboard buttons.

const PRODUCT_PREFIX: &str = "product_";
const CATALOG_PREV_PREFIX: &str = "catalog_prev_";
const CATALOG_NEXT_PREFIX: &str = "catalog_next_";

/// A menu selection decoded from its callback payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Catalog,
    Search,
    Contact,
    /// Open a product card by its identifier
    Product(String),
    /// Previous page; carries the page currently displayed
    CatalogPrev(usize),
    /// Next page; carries the page currently displayed
    CatalogNext(usize),
    BackToCatalog,
    BackToMain,
    MorePhotos,
}

impl CallbackAction {
    /// Decode a payload, `None` for anything unknown or malformed
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "catalog" => return Some(Self::Catalog),
            "search" => return Some(Self::Search),
            "contact" => return Some(Self::Contact),
            "back_to_catalog" => return Some(Self::BackToCatalog),
            "back_to_main" => return Some(Self::BackToMain),
            "more_photos" => return Some(Self::MorePhotos),
            _ => {}
        }

        if let Some(page) = data.strip_prefix(CATALOG_PREV_PREFIX) {
            return page.parse().ok().map(Self::CatalogPrev);
        }
        if let Some(page) = data.strip_prefix(CATALOG_NEXT_PREFIX) {
            return page.parse().ok().map(Self::CatalogNext);
        }
        data.strip_prefix(PRODUCT_PREFIX)
            .filter(|id| !id.is_empty())
            .map(|id| Self::Product(id.to_string()))
    }

    /// Encode the payload sent with a button
    pub fn payload(&self) -> String {
        match self {
            Self::Catalog => "catalog".to_string(),
            Self::Search => "search".to_string(),
            Self::Contact => "contact".to_string(),
            Self::Product(id) => format!("{PRODUCT_PREFIX}{id}"),
            Self::CatalogPrev(page) => format!("{CATALOG_PREV_PREFIX}{page}"),
            Self::CatalogNext(page) => format!("{CATALOG_NEXT_PREFIX}{page}"),
            Self::BackToCatalog => "back_to_catalog".to_string(),
            Self::BackToMain => "back_to_main".to_string(),
            Self::MorePhotos => "more_photos".to_string(),
        }
    }

    /// Localization key of the transient status shown while the action runs
    pub fn loading_message_key(&self) -> Option<&'static str> {
        match self {
            Self::Product(_) => Some("product-loading"),
            Self::MorePhotos => Some("photos-loading"),
            _ => None,
        }
    }
}
