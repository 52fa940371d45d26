//! Product Request and Response Shapes

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductRecord,
};

use crate::{
    envelope::ApiError,
    validation::{Validate, Violations},
};

const NAME_MAX_CHARS: usize = 40;

fn validate_product(name: &str, price: Decimal) -> Result<(), ApiError> {
    Violations::new()
        .required("name", name)
        .max_chars("name", name, NAME_MAX_CHARS)
        .money("price", price)
        .finish()
}

fn default_active() -> bool {
    true
}

/// Create Product Request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,

    #[serde(default = "default_active")]
    pub active: bool,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_product(&self.name, self.price)
    }
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            active: request.active,
        }
    }
}

/// Update Product Request
///
/// Carries the full replacement state; `id` must match the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateProductRequest {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,
    pub active: bool,
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_product(&self.name, self.price)
    }
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            active: request.active,
        }
    }
}

impl From<ProductRecord> for UpdateProductRequest {
    fn from(product: ProductRecord) -> Self {
        UpdateProductRequest {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price,
            active: product.active,
        }
    }
}

/// Patch Product Request
///
/// Absent fields are left untouched. `description` distinguishes an absent
/// key from an explicit `null`, which clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PatchProductRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub active: Option<bool>,
}

impl PatchProductRequest {
    pub(crate) fn apply_to(self, target: &mut UpdateProductRequest) {
        if let Some(name) = self.name {
            target.name = name;
        }

        if let Some(description) = self.description {
            target.description = description;
        }

        if let Some(price) = self.price {
            target.price = price;
        }

        if let Some(active) = self.active {
            target.active = active;
        }
    }
}

/// Wraps any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Product Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn current() -> UpdateProductRequest {
        UpdateProductRequest {
            id: 7,
            name: "Widget".to_string(),
            description: Some("basic".to_string()),
            price: Decimal::new(999, 2),
            active: true,
        }
    }

    #[test]
    fn patch_overwrites_only_present_fields() -> TestResult {
        let patch: PatchProductRequest = serde_json::from_value(json!({ "price": 12.5 }))?;
        let mut target = current();

        patch.apply_to(&mut target);

        assert_eq!(
            target,
            UpdateProductRequest {
                price: Decimal::new(125, 1),
                ..current()
            }
        );

        Ok(())
    }

    #[test]
    fn patch_null_description_clears_it() -> TestResult {
        let patch: PatchProductRequest = serde_json::from_value(json!({ "description": null }))?;
        let mut target = current();

        patch.apply_to(&mut target);

        assert_eq!(target.description, None);

        Ok(())
    }

    #[test]
    fn patch_without_description_keeps_it() -> TestResult {
        let patch: PatchProductRequest = serde_json::from_value(json!({ "active": false }))?;
        let mut target = current();

        patch.apply_to(&mut target);

        assert_eq!(target.description.as_deref(), Some("basic"));
        assert!(!target.active);

        Ok(())
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let result = serde_json::from_value::<PatchProductRequest>(json!({ "colour": "red" }));

        assert!(result.is_err(), "unknown field should be rejected");
    }

    #[test]
    fn create_request_defaults_active_and_description() -> TestResult {
        let request: CreateProductRequest =
            serde_json::from_value(json!({ "name": "Widget", "price": 9.99 }))?;

        assert!(request.active);
        assert_eq!(request.description, None);
        assert_eq!(request.price, Decimal::new(999, 2));

        Ok(())
    }

    #[test]
    fn create_request_validation_collects_every_problem() {
        let request = CreateProductRequest {
            name: "x".repeat(41),
            description: None,
            price: Decimal::new(-5, 0),
            active: true,
        };

        let result = request.validate();

        assert!(
            matches!(&result, Err(ApiError::BadRequest(messages)) if messages.len() == 2),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn record_seeds_update_request() {
        let record = ProductRecord {
            id: 7.into(),
            name: "Widget".to_string(),
            description: Some("basic".to_string()),
            price: Decimal::new(999, 2),
            active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };

        assert_eq!(UpdateProductRequest::from(record), current());
    }
}
