//! The shared response envelope.
//!
//! All handlers answer through [`send_success`] and [`send_error`], and
//! parse request bodies through [`decode_request_body`]. Once a status
//! line is committed the protocol cannot renegotiate it, so a failure to
//! encode the body is demoted to a diagnostic on the request's logger
//! instead of an error to the handler's caller.

use std::fmt;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use reef_types::{ApiError, ErrorCode};

use crate::context::RequestLogger;

/// Request bodies on the management surface are small; anything past this
/// is rejected while reading.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Errors produced while decoding a request body.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The request carried no body at all.
    #[error("empty request body")]
    EmptyBody,

    /// The body stream failed or exceeded the size limit.
    #[error("failed to read request body: {0}")]
    Read(axum::Error),

    /// The body was not valid JSON for the expected shape.
    #[error("malformed request body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read and parse the request body as JSON into `T`.
///
/// Consumes the body exactly once; the request cannot be read again
/// afterwards.
pub async fn decode_request_body<T: DeserializeOwned>(
    request: Request,
) -> Result<T, EnvelopeError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(EnvelopeError::Read)?;

    if bytes.is_empty() {
        return Err(EnvelopeError::EmptyBody);
    }

    Ok(serde_json::from_slice(&bytes)?)
}

/// Write a success response.
///
/// With `Some(payload)`, the body is the payload serialized as JSON and
/// the content-type is set accordingly. With `None`, no content-type is
/// set and no body is written, for status codes that must not carry one
/// (e.g. 204).
///
/// A payload that fails to serialize does not fail the handler: the
/// status line stands, the body is dropped, and the failure is logged on
/// the request's span together with the offending payload.
pub fn send_success<T>(log: &RequestLogger, status: StatusCode, payload: Option<&T>) -> Response<Body>
where
    T: Serialize + fmt::Debug,
{
    let Some(payload) = payload else {
        return Response::builder()
            .status(status)
            .body(Body::empty())
            .unwrap();
    };

    match serde_json::to_vec(payload) {
        Ok(body) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(Body::from(body))
            .unwrap(),
        Err(e) => {
            log.span().in_scope(|| {
                error!(error = %e, payload = ?payload, "failed to encode response body");
            });
            Response::builder()
                .status(status)
                .body(Body::empty())
                .unwrap()
        }
    }
}

/// Write an error response: `status` plus an [`ApiError`] JSON body.
///
/// Same best-effort policy as [`send_success`] when the envelope itself
/// fails to serialize.
pub fn send_error(
    log: &RequestLogger,
    status: StatusCode,
    message: &str,
    code: ErrorCode,
) -> Response<Body> {
    let resp = ApiError {
        code,
        error: message.to_string(),
    };

    match serde_json::to_vec(&resp) {
        Ok(body) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(Body::from(body))
            .unwrap(),
        Err(e) => {
            log.span().in_scope(|| {
                error!(error = %e, payload = ?resp, "failed to encode error response");
            });
            Response::builder()
                .status(status)
                .body(Body::empty())
                .unwrap()
        }
    }
}
