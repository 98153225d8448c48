//! # HTTP Surface
//!
//! Routes the product resource over HTTP with axum. Handlers are thin: extractors validate
//! the path and body, the [`ProductClient`] talks to the actor, and [`ApiError`] shapes every
//! failure.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/` | 200 greeting |
//! | any | `/products` | 307 to `/products/` |
//! | GET | `/products/` | 200 all products |
//! | POST | `/products/` | 201 created product |
//! | GET | `/products/{product_id}` | 200 product |
//! | PUT | `/products/{product_id}` | 200 replaced product |
//! | PATCH | `/products/{product_id}` | 200 merged product |
//! | DELETE | `/products/{product_id}` | 204 empty |

pub mod error;
pub mod extract;
pub mod handlers;

pub use error::ApiError;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::clients::ProductClient;

pub const SERVICE_TITLE: &str = "Product API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GREETING: &str = "Hello world";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
}

/// Builds the application router around a product client.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/", get(handlers::greet))
        .route("/products", any(handlers::redirect_to_collection))
        .route(
            "/products/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{product_id}",
            get(handlers::get_product)
                .put(handlers::replace_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { products })
}
