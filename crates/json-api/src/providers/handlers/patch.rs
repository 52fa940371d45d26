//! Patch Provider Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use catalog_app::domain::providers::{ProvidersServiceError, records::ProviderId};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::{
        errors::into_api_error,
        requests::{PatchProviderRequest, ProviderResponse, UpdateProviderRequest},
    },
    state::State,
    validation::Validate,
};

/// Patch Provider Handler
///
/// An unknown provider is a 400, like an invalid id.
#[handler]
#[tracing::instrument(
    name = "providers.patch",
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
    let patch: PatchProviderRequest = json_payload(req).await?;

    tracing::Span::current().record("provider_id", provider.into_i64());

    if provider.is_sentinel() {
        return Err(ApiError::bad_request("id: must not be 0"));
    }

    let current = state
        .app
        .providers
        .get_provider(provider)
        .await
        .map_err(|error| match error {
            ProvidersServiceError::NotFound => ApiError::bad_request("id: provider not found"),
            error => into_api_error(error),
        })?;

    let mut update = UpdateProviderRequest::from(current);

    patch.apply_to(&mut update);
    update.validate()?;

    let provider = state
        .app
        .providers
        .update_provider(provider, update.into())
        .await
        .map_err(into_api_error)?;

    info!(provider_id = %provider.id, "provider patched");

    Ok(Envelope::ok(provider.into()))
}
