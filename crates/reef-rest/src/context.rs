//! Request-scoped logging context.
//!
//! [`request_context`] runs before every handler: it mints a random request
//! id, opens a tracing span carrying it, and stores a [`RequestLogger`] in
//! the request's extensions. Handlers retrieve the logger with
//! [`RequestLogger::get`] and pass it explicitly into the envelope
//! functions, so every log line for one request shares the same
//! `request_id` field.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::Extensions;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, Span, info_span};

/// Logging handle bound to one HTTP request's lifetime.
///
/// Cheap to clone; all clones share the same span and request id.
#[derive(Debug, Clone)]
pub struct RequestLogger {
    request_id: Arc<str>,
    span: Span,
}

impl RequestLogger {
    pub(crate) fn new(request_id: String, span: Span) -> Self {
        Self {
            request_id: request_id.into(),
            span,
        }
    }

    /// Retrieve the logger attached by [`request_context`].
    ///
    /// # Panics
    ///
    /// Panics when the request never passed through the middleware. That is
    /// a programming-contract violation, and failing fast beats silently
    /// logging without request correlation.
    pub fn get(extensions: &Extensions) -> Self {
        extensions
            .get::<Self>()
            .cloned()
            .expect("no request logger in extensions: request_context middleware not installed")
    }

    /// The correlation id minted for this request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The tracing span carrying the request's correlation fields.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Middleware that attaches a [`RequestLogger`] to the request and
/// instruments the rest of its execution with the request span.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let request_id = gen_request_id();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request
        .extensions_mut()
        .insert(RequestLogger::new(request_id, span.clone()));

    next.run(request).instrument(span).await
}

/// Generate a request id: 12 lowercase hex characters (6 random bytes).
fn gen_request_id() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 6];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
