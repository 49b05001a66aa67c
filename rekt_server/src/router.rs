use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    state::ServerState,
    valuation::handler::valuation,
};

fn cors(cors_allow: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET]);

    if cors_allow.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_allow
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    log::warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    }
}

pub fn router(state: ServerState, cors_allow: &[String]) -> Router {
    let state = Arc::new(state);

    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/valuation", get(valuation))
        // Path the original web client calls
        .route("/api/wallet-data", get(valuation))
        .layer(cors(cors_allow))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
