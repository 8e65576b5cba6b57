// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP rendering of `LabelwerkError`.
//
// Status codes come from `ErrorKind` alone.  Bodies keep the shapes
// existing clients parse:
//
//   400  {"errors": [..]}                 missing fields
//   400  {"error": msg, "errors": [field]} any other input problem
//   403  {"error": "API key is missing"} / {"error": "Invalid API key"}
//   404  {"error": "Printer ID not found"}
//   500  {"error": cause}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use labelwerk_core::error::{ErrorKind, LabelwerkError};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    /// A request whose body is not a JSON object at all.
    pub fn malformed_body(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": format!("request body must be a JSON object: {cause}") }),
        }
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ClientInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Auth => StatusCode::FORBIDDEN,
        ErrorKind::Transport | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<LabelwerkError> for ApiError {
    fn from(err: LabelwerkError) -> Self {
        let kind = err.kind();
        let body = match (&err, kind) {
            (LabelwerkError::MissingFields(fields), _) => json!({ "errors": fields }),
            (_, ErrorKind::ClientInput) => json!({
                "error": err.to_string(),
                "errors": err.offending_fields(),
            }),
            (_, ErrorKind::NotFound) => json!({ "error": "Printer ID not found" }),
            _ => json!({ "error": err.to_string() }),
        };
        if kind == ErrorKind::Internal {
            tracing::error!(error = %err, "internal error while handling request");
        }
        Self {
            status: status_for(kind),
            body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
