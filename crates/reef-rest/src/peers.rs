//! Peer query handlers.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Response, StatusCode};
use reef_types::{ErrorCode, PeerListResp};

use crate::AppState;
use crate::context::RequestLogger;
use crate::envelope::{send_error, send_success};

/// `GET /v1/peers` — list all cluster peers.
///
/// Projects the directory's current snapshot onto the wire in the
/// directory's order. A directory failure answers 404 with the error's
/// message under the default code; the error path terminates the request,
/// exactly one response is written.
pub(crate) async fn list_peers(
    State(state): State<AppState>,
    request: Request,
) -> Response<Body> {
    let log = RequestLogger::get(request.extensions());

    let peers = match state.directory.peers().await {
        Ok(peers) => peers,
        Err(e) => {
            return send_error(&log, StatusCode::NOT_FOUND, &e.to_string(), ErrorCode::Generic);
        }
    };

    let resp = PeerListResp::from_peers(&peers);
    send_success(&log, StatusCode::OK, Some(&resp))
}

/// `GET /ping` — liveness probe.
///
/// Answers 204 with no body and no content-type.
pub(crate) async fn ping(request: Request) -> Response<Body> {
    let log = RequestLogger::get(request.extensions());
    send_success(&log, StatusCode::NO_CONTENT, None::<&()>)
}
