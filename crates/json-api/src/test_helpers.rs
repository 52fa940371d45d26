//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::{
        products::{MockProductsService, records::ProductRecord},
        providers::{MockProvidersService, records::ProviderRecord},
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_providers_mock() -> MockProvidersService {
    let mut providers = MockProvidersService::new();

    providers.expect_list_providers().never();
    providers.expect_get_provider().never();
    providers.expect_create_provider().never();
    providers.expect_update_provider().never();
    providers.expect_delete_provider().never();

    providers
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            providers: Arc::new(strict_providers_mock()),
        },
        route,
    )
}

pub(crate) fn providers_service(providers: MockProvidersService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            providers: Arc::new(providers),
        },
        route,
    )
}

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: format!("Widget {id}"),
        description: Some("basic".to_string()),
        price: Decimal::new(999, 2),
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_provider(id: i64) -> ProviderRecord {
    ProviderRecord {
        id: id.into(),
        name: format!("Acme {id}"),
        address: Some("1 Main St".to_string()),
        email: Some("sales@acme.test".to_string()),
        product_price: Decimal::new(1250, 2),
        registered_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
