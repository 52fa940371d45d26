//! Provider Request and Response Shapes

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_app::domain::providers::{
    data::{NewProvider, ProviderUpdate},
    records::ProviderRecord,
};

use crate::{
    envelope::ApiError,
    validation::{Validate, Violations},
};

fn validate_provider(name: &str, product_price: Decimal) -> Result<(), ApiError> {
    Violations::new()
        .required("name", name)
        .money("product_price", product_price)
        .finish()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateProviderRequest {
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub product_price: Decimal,
}

impl Validate for CreateProviderRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_provider(&self.name, self.product_price)
    }
}

impl From<CreateProviderRequest> for NewProvider {
    fn from(request: CreateProviderRequest) -> Self {
        NewProvider {
            name: request.name,
            address: request.address,
            email: request.email,
            product_price: request.product_price,
        }
    }
}

/// Full replacement state; `id` must match the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateProviderRequest {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    pub product_price: Decimal,
}

impl Validate for UpdateProviderRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_provider(&self.name, self.product_price)
    }
}

impl From<UpdateProviderRequest> for ProviderUpdate {
    fn from(request: UpdateProviderRequest) -> Self {
        ProviderUpdate {
            name: request.name,
            address: request.address,
            email: request.email,
            product_price: request.product_price,
        }
    }
}

impl From<ProviderRecord> for UpdateProviderRequest {
    fn from(provider: ProviderRecord) -> Self {
        UpdateProviderRequest {
            id: provider.id.into_i64(),
            name: provider.name,
            address: provider.address,
            email: provider.email,
            product_price: provider.product_price,
        }
    }
}

/// Present fields overwrite; `null` clears `address` or `email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PatchProviderRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub address: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,

    #[serde(default)]
    pub product_price: Option<Decimal>,
}

impl PatchProviderRequest {
    pub(crate) fn apply_to(self, target: &mut UpdateProviderRequest) {
        if let Some(name) = self.name {
            target.name = name;
        }

        if let Some(address) = self.address {
            target.address = address;
        }

        if let Some(email) = self.email {
            target.email = email;
        }

        if let Some(product_price) = self.product_price {
            target.product_price = product_price;
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProviderResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub product_price: Decimal,
    pub registered_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProviderRecord> for ProviderResponse {
    fn from(provider: ProviderRecord) -> Self {
        ProviderResponse {
            id: provider.id.into_i64(),
            name: provider.name,
            address: provider.address,
            email: provider.email,
            product_price: provider.product_price,
            registered_at: provider.registered_at,
            updated_at: provider.updated_at,
        }
    }
}
