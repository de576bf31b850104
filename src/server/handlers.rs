use super::types::{ErrorResponse, InfoResponse, TicketRequest, TicketResponse};
use crate::analyzer::TicketAnalyzer;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TicketAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: TicketAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: format!(
            "Ticket Resolution System (v{}) is running 🚀",
            env!("CARGO_PKG_VERSION")
        ),
    })
}

pub async fn analyze_ticket(
    State(state): State<AppState>,
    payload: Result<Json<TicketRequest>, JsonRejection>,
) -> Result<Json<TicketResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(ticket) = payload.map_err(|rejection| {
        warn!("Rejected ticket request: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse {
                detail: rejection.body_text(),
            }),
        )
    })?;

    let ticket_id = Uuid::new_v4();
    info!("Received ticket {}: '{}'", ticket_id, ticket.title);

    let analysis = state
        .analyzer
        .analyze(&ticket.title, &ticket.description)
        .instrument(info_span!("analyze_ticket", %ticket_id))
        .await;

    Ok(Json(TicketResponse {
        category: analysis.category,
        priority: analysis.priority,
        resolution: analysis.resolution,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    }))
}
