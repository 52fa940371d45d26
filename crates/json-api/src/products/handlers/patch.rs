//! Patch Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        requests::{PatchProductRequest, ProductResponse, UpdateProductRequest},
    },
    state::State,
    validation::Validate,
};

/// Patch Product Handler
///
/// Applies the present fields onto the stored product and re-validates the
/// result. An unknown product is a 400, not a 404.
#[handler]
#[tracing::instrument(
    name = "products.patch",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductId = req.id_param()?;
    let patch: PatchProductRequest = json_payload(req).await?;

    tracing::Span::current().record("product_id", product.into_i64());

    if product.is_sentinel() {
        return Err(ApiError::bad_request("id: must not be 0"));
    }

    let current = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(|error| match error {
            ProductsServiceError::NotFound => ApiError::bad_request("id: product not found"),
            error => into_api_error(error),
        })?;

    let mut update = UpdateProductRequest::from(current);

    patch.apply_to(&mut update);
    update.validate()?;

    let product = state
        .app
        .products
        .update_product(product, update.into())
        .await
        .map_err(into_api_error)?;

    info!(product_id = %product.id, "product patched");

    Ok(Envelope::ok(product.into()))
}
