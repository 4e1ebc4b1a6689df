//! Wire types for the management REST API.
//!
//! Every endpoint of the management surface answers with either a typed
//! success payload or an [`ApiError`] envelope; both forms are defined here
//! so servers and clients share one contract.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Peer, PeerId};

/// Wire projection of a single [`Peer`].
///
/// Fields are copied verbatim from the directory record; no transformation
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerGetResp {
    /// Unique identifier for the peer.
    pub id: PeerId,
    /// Human-readable name.
    pub name: String,
    /// Network addresses, preferred address first.
    pub addresses: Vec<String>,
}

impl From<&Peer> for PeerGetResp {
    fn from(peer: &Peer) -> Self {
        Self {
            id: peer.id,
            name: peer.name.clone(),
            addresses: peer.addresses.clone(),
        }
    }
}

/// Response body for listing all cluster peers.
///
/// Serializes as a bare JSON array, so an empty cluster view renders as
/// `[]` rather than `null`. Built fresh for each request and never mutated
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerListResp(pub Vec<PeerGetResp>);

impl PeerListResp {
    /// Project a directory snapshot onto the wire, one entry per peer in
    /// the directory's order.
    pub fn from_peers(peers: &[Peer]) -> Self {
        Self(peers.iter().map(PeerGetResp::from).collect())
    }
}

/// Machine-readable classification carried in an [`ApiError`].
///
/// Serialized as a bare integer on the wire. Unknown integers decode to
/// [`ErrorCode::Generic`] so old clients survive new codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catch-all for failures without a more specific classification.
    #[default]
    Generic = 0,
    /// The request body was absent, malformed, or shaped wrong.
    MalformedRequest = 1,
}

impl ErrorCode {
    fn from_u64(code: u64) -> Self {
        match code {
            1 => Self::MalformedRequest,
            _ => Self::Generic,
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*self as u64)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_u64(u64::deserialize(deserializer)?))
    }
}

/// Error envelope returned to clients on failed requests.
///
/// Constructed exactly once per failed request. The message carries the
/// source error's display text and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable classification.
    #[serde(rename = "error_code")]
    pub code: ErrorCode,
    /// Human-readable message.
    pub error: String,
}
