use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use rekt_core::{
    ValuationError, get_valuation,
    helpers::dto::{ValuationQuery, ValuationResult},
};

use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    get,
    path = "/valuation",
    params(ValuationQuery),
    description = "Value a wallet at today's ETH price and at the reference price",
    responses(
        (status = 200, description = "Success", body = ValuationResult),
        (status = 400, description = "Missing wallet address", body = ErrorServer),
        (status = 500, description = "Upstream lookup failed", body = ErrorServer),
    )
)]
#[axum::debug_handler]
pub async fn valuation(
    State(server_state): State<Arc<ServerState>>,
    Query(query): Query<ValuationQuery>,
) -> Result<Json<ValuationResult>, ErrorServer> {
    let address = query.address.unwrap_or_default();

    let result = get_valuation(
        &address,
        server_state.balance_provider(),
        server_state.price_provider(),
    )
    .await
    .map_err(|e| {
        match &e {
            ValuationError::InvalidInput => {
                log::warn!("Valuation requested without a wallet address")
            }
            ValuationError::UpstreamUnavailable { .. } => {
                log::error!("Failed to value wallet {}: {}", address.trim(), e)
            }
        }
        ErrorServer::from(e)
    })?;

    log::info!(
        "Valued wallet {}: {} ETH, diff ${}",
        address.trim(),
        result.balance_eth,
        result.diff
    );

    Ok(Json(result))
}
