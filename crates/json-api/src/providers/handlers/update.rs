//! Replace Provider Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::providers::records::ProviderId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::{
        errors::into_api_error,
        requests::{ProviderResponse, UpdateProviderRequest},
    },
    state::State,
    validation::Validate,
};

#[handler]
#[tracing::instrument(
    name = "providers.update",
    skip_all,
    fields(provider_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ProviderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider: ProviderId = req.id_param()?;
    let request: UpdateProviderRequest = json_payload(req).await?;

    tracing::Span::current().record("provider_id", provider.into_i64());

    if request.id != provider.into_i64() {
        return Err(ApiError::bad_request("id: does not match the route id"));
    }

    request.validate()?;

    let provider = state
        .app
        .providers
        .update_provider(provider, request.into())
        .await
        .map_err(into_api_error)?;

    info!(provider_id = %provider.id, "provider replaced");

    Ok(Envelope::ok(provider.into()))
}
