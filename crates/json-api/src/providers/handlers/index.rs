//! List Providers Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::{errors::into_api_error, requests::ProviderResponse},
    state::State,
};

#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Envelope<Vec<ProviderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let providers = state
        .app
        .providers
        .list_providers()
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(providers.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::providers::MockProvidersService;

    use crate::test_helpers::{make_provider, providers_service};

    use super::*;

    #[tokio::test]
    async fn test_list_providers_returns_all() -> TestResult {
        let mut repo = MockProvidersService::new();

        repo.expect_list_providers()
            .once()
            .return_once(|| Ok(vec![make_provider(1)]));

        let mut res = TestClient::get("http://example.com/api/Providers")
            .send(&providers_service(
                repo,
                Router::with_path("api/Providers").get(handler),
            ))
            .await;

        let body: Envelope<Vec<ProviderResponse>> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.result.map(|providers| providers.len()), Some(1));

        Ok(())
    }
}
