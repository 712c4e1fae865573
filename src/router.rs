use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::json::json_content_type;
use crate::modules::{home::api::home, notes::api::*};
use crate::types::AppState;

pub fn app(state: AppState, cors: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(home))
        .route(
            "/api/v1/notes",
             get(get_notes)
            .post(create_note)
        )
        .route("/api/v1/notes/:code", get(get_note_by_code))
        .route_layer(middleware::from_fn(json_content_type))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
