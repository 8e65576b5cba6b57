// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared-credential check.  Runs before body extraction, so a request
// without a valid `apikey` header is turned away before anything else is
// looked at.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use labelwerk_core::error::LabelwerkError;

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "apikey";

/// Plain equality against the configured key.
pub fn check_api_key(headers: &HeaderMap, expected: &str) -> Result<(), LabelwerkError> {
    let received = headers
        .get(API_KEY_HEADER)
        .filter(|v| !v.is_empty())
        .ok_or(LabelwerkError::MissingCredential)?;
    match received.to_str() {
        Ok(key) if key == expected => Ok(()),
        _ => Err(LabelwerkError::InvalidCredential),
    }
}

pub async fn require_api_key(
    State(expected): State<Arc<str>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_api_key(request.headers(), &expected).inspect_err(|e| {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = %e,
            "rejected unauthenticated request"
        );
    })?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut h = HeaderMap::new();
        if let Some(v) = value {
            h.insert(API_KEY_HEADER, HeaderValue::from_str(v).unwrap());
        }
        h
    }

    #[test]
    fn absent_or_empty_header_is_missing() {
        assert!(matches!(
            check_api_key(&headers(None), "s3cret"),
            Err(LabelwerkError::MissingCredential)
        ));
        assert!(matches!(
            check_api_key(&headers(Some("")), "s3cret"),
            Err(LabelwerkError::MissingCredential)
        ));
    }

    #[test]
    fn comparison_is_exact() {
        assert!(check_api_key(&headers(Some("s3cret")), "s3cret").is_ok());
        for wrong in ["S3CRET", "s3cret ", "s3cre"] {
            assert!(matches!(
                check_api_key(&headers(Some(wrong)), "s3cret"),
                Err(LabelwerkError::InvalidCredential)
            ));
        }
    }
}
