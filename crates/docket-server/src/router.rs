use axum::routing::get;
use axum::Router;
use docket_service::ItemService;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with all docket endpoints.
///
/// A known path hit with an unsupported method goes to the same fallback as
/// an unknown path.
pub fn build_router(service: ItemService) -> Router {
    Router::new()
        .route(
            "/health",
            get(handler::health_handler).fallback(handler::unknown_route),
        )
        .route(
            "/actors",
            get(handler::list_actors).fallback(handler::unknown_route),
        )
        .route(
            "/items",
            get(handler::list_items)
                .post(handler::create_item)
                .fallback(handler::unknown_route),
        )
        .route(
            "/items/:id",
            get(handler::get_item)
                .put(handler::update_item)
                .fallback(handler::unknown_route),
        )
        .fallback(handler::unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
