//! Get Provider Handler

use std::sync::Arc;

use salvo::prelude::*;

use catalog_app::domain::providers::records::ProviderId;

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    providers::{errors::into_api_error, requests::ProviderResponse},
    state::State,
};

/// Get Provider Handler
///
/// Id `0` is answered with 404 without a lookup.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ProviderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider: ProviderId = req.id_param()?;

    if provider.is_sentinel() {
        return Err(ApiError::NotFound);
    }

    let provider = state
        .app
        .providers
        .get_provider(provider)
        .await
        .map_err(into_api_error)?;

    Ok(Envelope::ok(provider.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::providers::{MockProvidersService, ProvidersServiceError};

    use crate::test_helpers::{make_provider, providers_service};

    use super::*;

    fn make_service(repo: MockProvidersService) -> Service {
        providers_service(repo, Router::with_path("api/Providers/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_provider_returns_200() -> TestResult {
        let mut repo = MockProvidersService::new();

        repo.expect_get_provider()
            .once()
            .withf(|id| *id == ProviderId::from_i64(2))
            .return_once(|_| Ok(make_provider(2)));

        let mut res = TestClient::get("http://example.com/api/Providers/2")
            .send(&make_service(repo))
            .await;

        let body: Envelope<ProviderResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.result.map(|p| p.name), Some("Acme 2".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_provider_zero_returns_404() -> TestResult {
        let mut repo = MockProvidersService::new();

        repo.expect_get_provider().never();

        let res = TestClient::get("http://example.com/api/Providers/0")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_provider_returns_404() -> TestResult {
        let mut repo = MockProvidersService::new();

        repo.expect_get_provider()
            .once()
            .return_once(|_| Err(ProvidersServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/Providers/9")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
