//! Providers Data

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct NewProvider {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub product_price: Decimal,
}

/// Full replacement of a provider's mutable columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderUpdate {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub product_price: Decimal,
}
