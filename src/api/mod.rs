mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::ItemStore;

pub fn create_router(store: ItemStore) -> Router {
    let api = Router::new()
        .route("/items", get(handlers::list_items))
        .route("/add", post(handlers::add_item))
        .route("/delete", post(handlers::delete_item))
        .route("/toggle-pin", post(handlers::toggle_pin))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
