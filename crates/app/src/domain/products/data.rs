//! Products Data

use rust_decimal::Decimal;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub active: bool,
}

/// Product Update Data
///
/// Replaces every mutable column of an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub active: bool,
}
