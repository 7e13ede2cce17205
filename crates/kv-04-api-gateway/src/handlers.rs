//! Request handlers.
//!
//! Authentication and storage are blocking, so each request body is handed
//! to tokio's blocking pool and runs to completion there.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use kv_02_namespaced_storage::{KeyValueStore, NamespaceError, NamespacedStore};
use kv_03_request_auth::{AuthError, Operation, OperationKind, RequestAuthenticator};
use kv_telemetry::{
    encode_metrics, record_request, RECORDS_CLEARED, RECORDS_WRITTEN, REQUEST_DURATION,
    SIGNATURE_FAILURES, STORAGE_ERRORS,
};
use shared_types::KeyValuePair;
use tracing::{error, info};

use crate::domain::dto::RecordDto;
use crate::domain::error::ApiError;

/// Storage engine handle shared by every request.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<RequestAuthenticator>,
    pub store: Arc<NamespacedStore<SharedStore>>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            authenticator: Arc::new(RequestAuthenticator::ecdsa()),
            store: Arc::new(NamespacedStore::new(store)),
        }
    }
}

enum Outcome {
    Stored,
    Listed(Vec<KeyValuePair>),
    Cleared(usize),
}

/// `POST /put`
pub async fn handle_put(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    execute(state, OperationKind::Put, body).await?;
    Ok(StatusCode::OK)
}

/// `POST /getAll`
pub async fn handle_get_all(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<RecordDto>>, ApiError> {
    match execute(state, OperationKind::GetAll, body).await? {
        Outcome::Listed(records) => Ok(Json(records.into_iter().map(RecordDto::from).collect())),
        Outcome::Stored | Outcome::Cleared(_) => {
            Err(ApiError::Internal("getAll produced no listing".into()))
        }
    }
}

/// `POST /clear`
pub async fn handle_clear(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    execute(state, OperationKind::Clear, body).await?;
    Ok(StatusCode::OK)
}

/// `GET /health`
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /metrics`
pub async fn handle_metrics() -> Response {
    match encode_metrics() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn execute(state: AppState, kind: OperationKind, body: Bytes) -> Result<Outcome, ApiError> {
    let endpoint = kind.as_str();
    let timer = REQUEST_DURATION.with_label_values(&[endpoint]).start_timer();

    let result = tokio::task::spawn_blocking(move || run(&state, kind, &body))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
        .and_then(|inner| inner);
    timer.observe_duration();

    match &result {
        Ok(_) => record_request(endpoint, "ok"),
        Err(err) => {
            record_request(endpoint, err.outcome());
            match err {
                ApiError::Auth(AuthError::SignatureMismatch) => SIGNATURE_FAILURES.inc(),
                ApiError::Storage(_) => {
                    STORAGE_ERRORS.inc();
                    error!(operation = %kind, error = %err, "Storage failure");
                }
                ApiError::Internal(_) => error!(operation = %kind, error = %err, "Handler failed"),
                ApiError::Auth(_) => {}
            }
        }
    }
    result
}

fn run(state: &AppState, kind: OperationKind, body: &[u8]) -> Result<Outcome, ApiError> {
    let request = state.authenticator.authorize(kind, body)?;
    let namespace = &request.namespace;

    let outcome = match request.operation {
        Operation::Put(record) => {
            state.store.put(namespace, record.key(), record.value())?;
            RECORDS_WRITTEN.inc();
            Outcome::Stored
        }
        Operation::GetAll => Outcome::Listed(state.store.get_all(namespace)?),
        Operation::Clear => {
            let removed = state.store.clear(namespace).inspect_err(|err| {
                if let NamespaceError::ClearAborted { removed, .. } = err {
                    RECORDS_CLEARED.inc_by(*removed as u64);
                }
            })?;
            RECORDS_CLEARED.inc_by(removed as u64);
            info!(namespace = %namespace, removed, "Namespace cleared");
            Outcome::Cleared(removed)
        }
    };
    Ok(outcome)
}
