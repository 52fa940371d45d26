//! App Router

use salvo::Router;

use crate::{products, providers};

/// Resource routes. Paths keep the `api/Productos` and `api/Providers`
/// spellings existing clients call.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("Productos")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .patch(products::patch::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("Providers")
                .get(providers::index::handler)
                .post(providers::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(providers::get::handler)
                        .put(providers::update::handler)
                        .patch(providers::patch::handler)
                        .delete(providers::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use catalog_app::domain::products::MockProductsService;
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    #[tokio::test]
    async fn product_routes_are_mounted_under_api() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Ok(make_product(4)));

        let res = TestClient::get("http://example.com/api/Productos/4")
            .send(&products_service(repo, app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_resource_is_404() -> TestResult {
        let res = TestClient::get("http://example.com/api/Categories")
            .send(&products_service(MockProductsService::new(), app_router()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
