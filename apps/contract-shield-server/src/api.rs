//! API handlers for the Contract Shield server
//!
//! Provides REST endpoints for:
//! - Liveness
//! - Contract upload and risk analysis

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use shared_types::AnalysisResult;
use text_extract::{extract_text, DocumentFormat};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ServerError;
use crate::AppState;

/// Multipart field carrying the uploaded contract
pub const UPLOAD_FIELD: &str = "file";

pub const SERVICE_NAME: &str = "Contract Shield API";

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Handler: GET /
pub async fn handle_root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// An uploaded file pulled out of the multipart body
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Read the `file` field, skipping any other fields
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ServerError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?.to_vec();
        return Ok(Upload { filename, bytes });
    }

    Err(ServerError::InvalidRequest(format!(
        "Missing '{}' field in multipart upload",
        UPLOAD_FIELD
    )))
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ServerError> {
    let request_id = Uuid::new_v4();
    let upload = read_upload(&mut multipart).await?;

    info!(
        %request_id,
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        "Analyze request"
    );

    let format = DocumentFormat::from_filename(&upload.filename).map_err(|e| {
        warn!(%request_id, "Rejected upload: {}", e);
        ServerError::from(e)
    })?;

    // Parsing and rule matching are CPU-bound; a parser panic stays in its task
    let engine = state.engine.clone();
    let analysis = tokio::task::spawn_blocking(move || {
        extract_text(&upload.bytes, format).map(|text| engine.analyze(&text))
    })
    .await
    .map_err(|e| ServerError::Processing(e.to_string()))?
    .map_err(|e| {
        if e.is_client_error() {
            warn!(%request_id, format = %format, "Rejected upload: {}", e);
        } else {
            debug!(%request_id, format = %format, "Extraction failed: {:?}", e);
        }
        ServerError::from(e)
    })?;

    for flag in &analysis.red_flags {
        debug!(
            %request_id,
            title = %flag.title,
            severity = flag.severity.as_str(),
            "Red flag"
        );
    }

    info!(
        %request_id,
        format = %format,
        text_length = analysis.text_length,
        flags = analysis.red_flags.len(),
        risk_score = analysis.risk_score,
        "Analysis complete"
    );

    Ok(Json(analysis))
}
