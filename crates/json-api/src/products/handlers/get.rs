//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use catalog_app::domain::products::records::ProductId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{errors::into_api_error, requests::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Id `0` is never assigned and is answered with 404 without a lookup.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductId = req.id_param()?;

    if product.is_sentinel() {
        return Err(ApiError::NotFound);
    }

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(product.into()))
}
