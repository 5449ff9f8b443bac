pub mod health;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/test", get(health::probe_handler))
        // Catalog API
        .route("/api/menu", get(handlers::handle_menu))
        .route("/api/frontend/tech", get(handlers::handle_tech_stack))
        .route("/api/projects", get(handlers::handle_projects))
        .route("/api/design/focus", get(handlers::handle_design_focus))
        .route("/api/design/gallery", get(handlers::handle_gallery))
        .route("/api/reviews", get(handlers::handle_reviews))
        .route("/api/contact", get(handlers::handle_contacts))
        .with_state(state)
}

/// Router plus the middleware every deployment runs with.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
