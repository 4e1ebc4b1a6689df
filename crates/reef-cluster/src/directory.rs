//! The peer directory query trait and its in-memory implementation.

use std::sync::RwLock;

use reef_types::{Peer, PeerId};
use tracing::debug;

use crate::error::DirectoryError;

/// Read-only query capability over the cluster membership view.
///
/// All implementations must be `Send + Sync`: the REST surface calls
/// [`peers`](PeerDirectory::peers) concurrently from independent request
/// handlers and holds no locks of its own.
#[async_trait::async_trait]
pub trait PeerDirectory: Send + Sync {
    /// Return a snapshot of all peers currently known to the directory.
    ///
    /// The returned order is meaningful and must be stable for a given
    /// directory state; callers render it as-is.
    async fn peers(&self) -> Result<Vec<Peer>, DirectoryError>;
}

/// In-memory peer directory backed by a `RwLock<Vec>`.
///
/// Keeps peers in insertion order, which is the order snapshots are
/// returned in. Used by the daemon for config-seeded clusters and by
/// tests.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    peers: RwLock<Vec<Peer>>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with the given peers, in order.
    pub fn with_peers(peers: Vec<Peer>) -> Self {
        Self {
            peers: RwLock::new(peers),
        }
    }

    /// Add a peer, or update it in place when the id is already present.
    ///
    /// Updating keeps the peer's original position so snapshot order stays
    /// stable across record refreshes.
    pub fn insert(&self, peer: Peer) {
        let mut peers = self.peers.write().expect("lock poisoned");
        debug!(id = %peer.id, name = %peer.name, "recording peer");
        match peers.iter_mut().find(|p| p.id == peer.id) {
            Some(existing) => *existing = peer,
            None => peers.push(peer),
        }
    }

    /// Look up a single peer by id.
    pub fn get(&self, id: &PeerId) -> Option<Peer> {
        let peers = self.peers.read().expect("lock poisoned");
        peers.iter().find(|p| p.id == *id).cloned()
    }

    /// Return the number of recorded peers.
    pub fn len(&self) -> usize {
        self.peers.read().expect("lock poisoned").len()
    }

    /// Whether the directory holds no peers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl PeerDirectory for MemoryDirectory {
    async fn peers(&self) -> Result<Vec<Peer>, DirectoryError> {
        let peers = self.peers.read().expect("lock poisoned");
        Ok(peers.clone())
    }
}
