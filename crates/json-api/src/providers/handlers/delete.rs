//! Delete Provider Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::providers::records::ProviderId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::errors::into_api_error,
    state::State,
};

#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Envelope<()>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider: ProviderId = req.id_param()?;

    state
        .app
        .providers
        .delete_provider(provider)
        .await
        .map_err(into_api_error)?;

    info!(provider_id = %provider, "provider deleted");

    Ok(Envelope::empty())
}
