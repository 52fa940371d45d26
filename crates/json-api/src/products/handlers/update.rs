//! Replace Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::products::records::ProductId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{
        errors::into_api_error,
        requests::{ProductResponse, UpdateProductRequest},
    },
    state::State,
    validation::Validate,
};

/// Replace Product Handler
///
/// Overwrites every field. The body `id` must equal the route id.
#[handler]
#[tracing::instrument(
    name = "products.update",
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
    let request: UpdateProductRequest = json_payload(req).await?;

    tracing::Span::current().record("product_id", product.into_i64());

    if request.id != product.into_i64() {
        return Err(ApiError::bad_request("id: does not match the route id"));
    }

    request.validate()?;

    let product = state
        .app
        .products
        .update_product(product, request.into())
        .await
        .map_err(into_api_error)?;

    info!(product_id = %product.id, "product replaced");

    Ok(Envelope::ok(product.into()))
}
