//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::{
        products::{
            DefaultProductsService, MockProductsRepository, MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        subscriptions::{
            DefaultSubscriptionPlansService, MockSubscriptionPlansRepository,
            MockSubscriptionPlansService,
            records::{SubscriptionPlanRecord, SubscriptionPlanUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Widget".to_string(),
        description: "d".to_string(),
        price: 9.99,
        product_type: "digital".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_plan(uuid: SubscriptionPlanUuid, product: ProductUuid) -> SubscriptionPlanRecord {
    SubscriptionPlanRecord {
        uuid,
        product_uuid: product,
        plan_name: "Monthly".to_string(),
        duration: 30,
        price: 9.99,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_get_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_list_products().never();

    products
}

fn strict_subscriptions_mock() -> MockSubscriptionPlansService {
    let mut subscriptions = MockSubscriptionPlansService::new();

    subscriptions.expect_create_subscription_plan().never();
    subscriptions.expect_get_subscription_plan().never();
    subscriptions.expect_update_subscription_plan().never();
    subscriptions.expect_delete_subscription_plan().never();
    subscriptions.expect_list_subscription_plans().never();

    subscriptions
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            subscriptions: Arc::new(strict_subscriptions_mock()),
        },
        route,
    )
}

pub(crate) fn subscriptions_service(
    subscriptions: MockSubscriptionPlansService,
    route: Router,
) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            subscriptions: Arc::new(subscriptions),
        },
        route,
    )
}

fn unreachable_products_repository() -> MockProductsRepository {
    let mut repository = MockProductsRepository::new();

    repository.expect_create_product().never();
    repository.expect_get_product().never();
    repository.expect_update_product().never();
    repository.expect_delete_product().never();
    repository.expect_list_products().never();

    repository
}

fn unreachable_plans_repository() -> MockSubscriptionPlansRepository {
    let mut repository = MockSubscriptionPlansRepository::new();

    repository.expect_create_plan().never();
    repository.expect_get_plan().never();
    repository.expect_update_plan().never();
    repository.expect_delete_plan().never();
    repository.expect_list_plans_by_product().never();

    repository
}

/// Real services over storage that must never be reached, for requests that
/// fail validation.
pub(crate) fn validating_service(route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(DefaultProductsService::new(Arc::new(
                unreachable_products_repository(),
            ))),
            subscriptions: Arc::new(DefaultSubscriptionPlansService::new(
                Arc::new(unreachable_plans_repository()),
                Arc::new(unreachable_products_repository()),
            )),
        },
        route,
    )
}
