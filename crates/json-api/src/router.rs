//! App Router

use salvo::Router;

use crate::{products, subscription_plans};

/// Resource routes for products and subscription plans.
pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("subscription-plans")
                                .get(subscription_plans::index::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("subscription-plans")
                .post(subscription_plans::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(subscription_plans::get::handler)
                        .put(subscription_plans::update::handler)
                        .delete(subscription_plans::delete::handler),
                ),
        )
}
