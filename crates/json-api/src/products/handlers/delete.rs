//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::products::records::ProductId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Delete Product Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Envelope<()>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductId = req.id_param()?;

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    info!(product_id = %product, "product deleted");

    Ok(Envelope::empty())
}
