//! Shared types and identifiers for Reef.
//!
//! This crate defines the cluster-wide peer identifier ([`PeerId`]), the
//! [`Peer`] directory record, and the wire types exchanged over the
//! management REST API ([`PeerGetResp`], [`PeerListResp`], [`ApiError`],
//! [`ErrorCode`]).

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod api;

pub use api::{ApiError, ErrorCode, PeerGetResp, PeerListResp};

// ---------------------------------------------------------------------------
// PeerId
// ---------------------------------------------------------------------------

/// Unique cluster-wide identifier for a peer.
///
/// 32 raw bytes, rendered as 64 lowercase hex characters everywhere a
/// human or the wire sees it. JSON serialization is the hex string, not a
/// byte array, so `id` fields stay readable in API responses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PeerId([u8; 32]);

impl PeerId {
    /// Create an ID by hashing arbitrary data with BLAKE3.
    pub fn from_data(data: &[u8]) -> Self {
        Self(blake3::hash(data).into())
    }

    /// Return the raw 32-byte representation.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse an ID from its 64-character hex rendering.
    pub fn from_hex(s: &str) -> Result<Self, ParsePeerIdError> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(ParsePeerIdError::Length(raw.len()));
        }

        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_val(raw[2 * i])?;
            let lo = hex_val(raw[2 * i + 1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

/// Decode a single hex digit, accepting both cases.
fn hex_val(b: u8) -> Result<u8, ParsePeerIdError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ParsePeerIdError::InvalidChar(b as char)),
    }
}

/// Errors produced when parsing a [`PeerId`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParsePeerIdError {
    /// The input was not exactly 64 characters long.
    #[error("peer id must be 64 hex characters, got {0}")]
    Length(usize),

    /// The input contained a non-hex character.
    #[error("invalid hex character {0:?} in peer id")]
    InvalidChar(char),
}

impl From<[u8; 32]> for PeerId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for PeerId {
    type Err = ParsePeerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({self})")
    }
}

impl Serialize for PeerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Peer
// ---------------------------------------------------------------------------

/// A member node of the storage cluster as recorded by the peer directory.
///
/// The REST surface treats these records as read-only: it queries the
/// directory for a snapshot and projects it onto the wire, never creating,
/// mutating, or deleting one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Unique identifier for this peer.
    pub id: PeerId,
    /// Human-readable name; not guaranteed unique across the cluster.
    pub name: String,
    /// Network addresses, preferred address first. At least one expected.
    pub addresses: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
