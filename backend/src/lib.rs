pub mod error;
pub mod fallback;
pub mod handlers;
pub mod openai;
pub mod personas;
pub mod roast;
pub mod scorer;

use crate::fallback::FallbackRoaster;
use crate::handlers::{generate_roast, list_characters};
use crate::openai::OpenAiGenerator;
use crate::personas::PersonaRegistry;
use crate::roast::{EnvCredentials, Roaster};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub roaster: Arc<Roaster>,
}

/// Mount the API with production wiring: persona roster built at startup,
/// credentials read from the environment, OS-seeded fallback selection.
pub fn init(router: Router<AppState>) -> Router<()> {
    let roaster = Roaster::new(
        PersonaRegistry::new(),
        Box::new(EnvCredentials),
        OpenAiGenerator::new(),
        FallbackRoaster::new(),
    );
    init_with_state(
        router,
        AppState {
            roaster: Arc::new(roaster),
        },
    )
}

/// Mount the API on top of an existing router with caller-supplied state.
/// Tests use this to inject a seeded RNG and a stubbed credential source.
pub fn init_with_state(router: Router<AppState>, state: AppState) -> Router<()> {
    router
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/characters", get(list_characters))
        .route("/api/roast", post(generate_roast))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
