use axum::{extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    pkg::state::AppState,
    prelude::{Error, Result},
};

/// Inbound body of POST /samplefunction. Keys are PascalCase on the wire;
/// missing fields fall back to defaults so validation, not parsing, decides
/// whether `Field1` was supplied.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SampleRequest {
    pub field1: String,
    pub field2: bool,
    pub field3: f64,
}

/// Parse, validate, delegate. Malformed JSON and a missing `Field1` are
/// client errors; a failing insert is a server error. Success carries no
/// body, just 200.
pub async fn sample_function(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode> {
    let request: SampleRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!("malformed request body: {}", err);
            return Err(err.into());
        }
    };

    if request.field1.is_empty() {
        tracing::info!("invalid request object");
        return Err(Error::Validation("Field1 must be non-empty"));
    }

    if let Err(err) = state.service.insert().await {
        tracing::error!("insert failed: {}", err);
        return Err(err);
    }

    Ok(StatusCode::OK)
}
