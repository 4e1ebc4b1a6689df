//! Tests for the reef-cluster crate.

#[cfg(test)]
mod tests {
    use reef_types::{Peer, PeerId};

    use crate::directory::{MemoryDirectory, PeerDirectory};
    use crate::error::DirectoryError;

    /// Create a test peer numbered `n`.
    fn test_peer(n: u8) -> Peer {
        Peer {
            id: PeerId::from([n; 32]),
            name: format!("node-{n}"),
            addresses: vec![format!("10.0.0.{n}:24007")],
        }
    }

    #[tokio::test]
    async fn test_empty_directory_returns_empty_snapshot() {
        let dir = MemoryDirectory::new();
        let peers = dir.peers().await.unwrap();
        assert!(peers.is_empty());
        assert!(dir.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_preserves_insertion_order() {
        let dir = MemoryDirectory::new();
        dir.insert(test_peer(3));
        dir.insert(test_peer(1));
        dir.insert(test_peer(2));

        let peers = dir.peers().await.unwrap();
        let names: Vec<&str> = peers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["node-3", "node-1", "node-2"]);
    }

    #[tokio::test]
    async fn test_insert_existing_id_updates_in_place() {
        let dir = MemoryDirectory::new();
        dir.insert(test_peer(1));
        dir.insert(test_peer(2));

        let mut renamed = test_peer(1);
        renamed.name = "node-1-renamed".to_string();
        renamed.addresses.push("10.1.0.1:24007".to_string());
        dir.insert(renamed.clone());

        assert_eq!(dir.len(), 2);
        let peers = dir.peers().await.unwrap();
        // Position is preserved; the record itself is replaced.
        assert_eq!(peers[0], renamed);
        assert_eq!(peers[1], test_peer(2));
    }

    #[tokio::test]
    async fn test_with_peers_seeds_in_order() {
        let seeds = vec![test_peer(2), test_peer(1)];
        let dir = MemoryDirectory::with_peers(seeds.clone());
        assert_eq!(dir.peers().await.unwrap(), seeds);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let dir = MemoryDirectory::new();
        dir.insert(test_peer(7));
        assert_eq!(dir.get(&PeerId::from([7u8; 32])), Some(test_peer(7)));
        assert_eq!(dir.get(&PeerId::from([9u8; 32])), None);
    }

    #[tokio::test]
    async fn test_snapshot_is_independent_of_later_inserts() {
        let dir = MemoryDirectory::new();
        dir.insert(test_peer(1));
        let snapshot = dir.peers().await.unwrap();

        dir.insert(test_peer(2));
        assert_eq!(snapshot.len(), 1, "earlier snapshot must not grow");
        assert_eq!(dir.peers().await.unwrap().len(), 2);
    }

    #[test]
    fn test_unavailable_error_display_is_bare() {
        // The REST surface forwards this display text verbatim to clients.
        assert_eq!(DirectoryError::Unavailable.to_string(), "unavailable");
    }

    #[test]
    fn test_corrupt_error_display_names_detail() {
        let err = DirectoryError::Corrupt {
            detail: "truncated address list".to_string(),
        };
        assert_eq!(err.to_string(), "corrupt peer record: truncated address list");
    }
}
