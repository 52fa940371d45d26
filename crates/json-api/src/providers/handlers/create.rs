//! Create Provider Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::{
        errors::into_api_error,
        requests::{CreateProviderRequest, ProviderResponse},
    },
    state::State,
    validation::Validate,
};

#[handler]
#[tracing::instrument(
    name = "providers.create",
    skip_all,
    fields(provider_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Envelope<ProviderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CreateProviderRequest = json_payload(req).await?;

    request.validate()?;

    let provider = state
        .app
        .providers
        .create_provider(request.into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("provider_id", provider.id.into_i64());

    res.add_header(LOCATION, format!("/api/Providers/{}", provider.id), true)
        .or_500("failed to set location header")?;

    info!(provider_id = %provider.id, "provider created");

    Ok(Envelope::created(provider.into()))
}
