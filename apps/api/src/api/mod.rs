// API layer module (HTTP adapter over the service layer)

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::ContactService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
}

impl AppState {
    pub fn new(contacts: ContactService) -> Self {
        Self { contacts }
    }
}

/// Builds the application router with middleware attached
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Contact routes
        .route("/getAllContacts", get(handlers::contacts::get_all_contacts))
        .route("/addContact", post(handlers::contacts::add_contact))
        .route(
            "/getContactsByName",
            get(handlers::contacts::get_contacts_by_name),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
