//! # Product Data Model
//!
//! A product is one spreadsheet row: a mapping from normalised column name
//! (trimmed, lowercase) to the cell value. Well-known columns are `name`,
//! `where`, `both` (year), `cost`, `status`, `description` and
//! `image_1`..`image_3`; the identifier comes from the first populated
//! column of [`ID_ALIASES`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{ID_ALIASES, IMAGE_COLUMNS, UNKNOWN_PRODUCT_ID};

/// A single spreadsheet cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Wrap a raw string, mapping the empty string to [`CellValue::Empty`]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    /// True for empty cells, whitespace and spreadsheet `nan` markers
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
            }
            CellValue::Int(_) | CellValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            // Whole numbers stored as floats (article numbers, years) read as integers
            CellValue::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                write!(f, "{}", *x as i64)
            }
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One catalog row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    fields: BTreeMap<String, CellValue>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for fixtures
    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.fields.insert(column.into(), value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.fields.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }

    /// Display text of a column; missing columns read as the empty string
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }

    /// Display text of a column, or `None` when it is missing or blank
    pub fn non_blank(&self, column: &str) -> Option<String> {
        self.get(column)
            .filter(|value| !value.is_blank())
            .map(|value| value.to_string().trim().to_string())
    }

    /// True when every cell of the row is blank
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(CellValue::is_blank)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Resolve the identifier by alias priority.
    ///
    /// Aliases are looked up verbatim and in lowercase, so rows read from a
    /// normalised spreadsheet and hand-built rows resolve the same way.
    pub fn resolve_id(&self) -> Option<String> {
        ID_ALIASES.iter().find_map(|alias| {
            self.non_blank(alias)
                .or_else(|| self.non_blank(&alias.to_lowercase()))
        })
    }

    /// Identifier carried by the product's selection control
    pub fn id(&self) -> String {
        self.resolve_id()
            .unwrap_or_else(|| UNKNOWN_PRODUCT_ID.to_string())
    }

    /// Declared image references, in column order, blanks skipped
    pub fn image_refs(&self) -> Vec<String> {
        IMAGE_COLUMNS
            .iter()
            .filter_map(|column| self.non_blank(column))
            .collect()
    }
}
