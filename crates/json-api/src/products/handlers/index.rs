//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    products::{errors::into_api_error, requests::ProductResponse},
    state::State,
};

/// Every product, ordered by id.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Envelope<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(products.into_iter().map(Into::into).collect()))
}
