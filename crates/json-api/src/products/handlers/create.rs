//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        requests::{CreateProductRequest, ProductResponse},
    },
    state::State,
    validation::Validate,
};

/// Create Product Handler
///
/// Answers 201 with a `Location` header pointing at the new product.
#[handler]
#[tracing::instrument(
    name = "products.create",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CreateProductRequest = json_payload(req).await?;

    request.validate()?;

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", product.id.into_i64());

    res.add_header(LOCATION, format!("/api/Productos/{}", product.id), true)
        .or_500("failed to set location header")?;

    info!(product_id = %product.id, "product created");

    Ok(Envelope::created(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/Productos").post(handler))
    }

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: Some("basic".to_string()),
            price: Decimal::new(999, 2),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_location() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| *new == widget())
            .return_once(|new| {
                Ok(ProductRecord {
                    name: new.name,
                    description: new.description,
                    ..make_product(12)
                })
            });

        let mut res = TestClient::post("http://example.com/api/Productos")
            .json(&json!({
                "name": "Widget",
                "description": "basic",
                "price": 9.99,
                "active": true
            }))
            .send(&make_service(repo))
            .await;

        let location = res
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body: Envelope<ProductResponse> = res.take_json().await?;
        let product = body.result.ok_or("missing result")?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status_code, 201);
        assert_eq!(location.as_deref(), Some("/api/Productos/12"));
        assert_eq!(product.id, 12);
        assert_eq!(product.name, "Widget");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_name_returns_400_name_exists() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/api/Productos")
            .json(&json!({ "name": "widget", "price": 1 }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.error_messages
                .iter()
                .any(|message| message.starts_with("NameExists")),
            "expected NameExists, got {:?}",
            body.error_messages
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_fields_returns_400_without_storage() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/api/Productos")
            .json(&json!({ "name": "", "price": -1 }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.error_messages,
            ["name: is required", "price: must not be negative"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_absent_body_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let res = TestClient::post("http://example.com/api/Productos")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_price_beyond_column_range_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/api/Productos")
            .json(&json!({ "name": "Big", "price": 1e17 }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error_messages, ["price: is too large"]);

        Ok(())
    }
}
