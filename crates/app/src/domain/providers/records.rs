//! Provider Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Provider Id
pub type ProviderId = TypedId<ProviderRecord>;

/// Provider Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    pub id: ProviderId,
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,

    /// Price this provider charges per product unit.
    pub product_price: Decimal,

    pub registered_at: Timestamp,
    pub updated_at: Timestamp,
}
