// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP surface.
//
// `/` and `/ping` are open.  Everything under `/printers` and `/print`
// sits behind the `apikey` check.  Each label kind has its own print
// endpoint; they differ only in the kind handed to the dispatcher.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tracing::{debug, info};

use labelwerk_core::fields::JobFields;
use labelwerk_core::types::{LabelKind, PrinterAddress, PrinterState};
use labelwerk_print::inventory::{self, RefreshOutcome};
use labelwerk_print::LabelTransport;

use crate::auth::require_api_key;
use crate::error::ApiError;
use crate::state::AppState;

pub const ACK_MESSAGE: &str = "Label sent to printer successfully";

/// Print endpoint per label kind.
pub const PRINT_ROUTES: [(&str, LabelKind); 7] = [
    ("/print", LabelKind::Standard),
    ("/print/msl", LabelKind::MslSticker),
    ("/print/special-instructions", LabelKind::SpecialInstructions),
    ("/print/dry", LabelKind::Dry),
    ("/print/tracescan", LabelKind::Tracescan),
    ("/print/svt-ok", LabelKind::SvtFortloxOk),
    ("/print/svt-nok", LabelKind::SvtFortloxNok),
];

type Shared<T> = State<Arc<AppState<T>>>;

pub fn router<T: LabelTransport>(state: Arc<AppState<T>>) -> Router {
    let mut protected = Router::new()
        .route("/printers", get(list_printers::<T>))
        .route("/printers/status", get(printer_status::<T>))
        .route("/printers/refresh", post(refresh_printers::<T>));

    for (path, kind) in PRINT_ROUTES {
        protected = protected.route(
            path,
            post(move |State(state): Shared<T>, body: Bytes| print_label(state, kind, body)),
        );
    }

    let protected = protected
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.api_key),
            require_api_key,
        ))
        .with_state(state);

    Router::new()
        .route("/", get(index))
        .route("/ping", get(ping))
        .merge(protected)
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "labelwerk api" }))
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// id -> {host, port}
async fn list_printers<T: LabelTransport>(
    State(state): Shared<T>,
) -> Json<BTreeMap<String, PrinterAddress>> {
    let printers = state
        .directory()
        .all()
        .iter()
        .map(|r| (r.id.clone(), PrinterAddress::from(r)))
        .collect();
    Json(printers)
}

/// id -> Online | Offline | Error
async fn printer_status<T: LabelTransport>(
    State(state): Shared<T>,
) -> Json<BTreeMap<String, PrinterState>> {
    let report = state.dispatcher.status().await;
    Json(report.into_iter().map(|s| (s.id, s.state)).collect())
}

async fn refresh_printers<T: LabelTransport>(State(state): Shared<T>) -> Json<RefreshOutcome> {
    let directory = state.directory();
    let outcome = match &state.inventory {
        Some(source) => inventory::refresh(source, directory.as_ref()).await,
        None => {
            info!("refresh requested but no inventory is configured");
            RefreshOutcome {
                updated: false,
                count: directory.len(),
            }
        }
    };
    Json(outcome)
}

async fn print_label<T: LabelTransport>(
    state: Arc<AppState<T>>,
    kind: LabelKind,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let fields: JobFields = serde_json::from_slice(&body).map_err(ApiError::malformed_body)?;
    let receipt = state.dispatcher.dispatch(kind, &fields).await?;
    debug!(job_id = %receipt.job_id, printer = %receipt.printer_id, "print request acknowledged");
    Ok(Json(json!({ "message": ACK_MESSAGE })))
}
