use super::types::{HealthResponse, QueryRequest};
use crate::{Error, Result, relay::Relay};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn query(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let span = info_span!("query", %request_id);

    async move {
        let answer = state.relay.handle_query(&request.query).await?;
        info!("Query answered");
        Ok::<_, Error>(Json(answer))
    }
    .instrument(span)
    .await
}
