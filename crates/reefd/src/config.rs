//! TOML configuration for the Reef daemon.
//!
//! When no config file is provided, defaults apply: management API on
//! `0.0.0.0:24007`, `info`-level logging, no seed peers.

use std::path::Path;

use reef_types::{Peer, PeerId};
use serde::Deserialize;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Management REST API settings.
    pub rest: RestSection,
    /// Logging configuration.
    pub log: LogSection,
    /// Peers seeded into the directory at startup.
    pub peers: Vec<PeerSeed>,
}

/// `[rest]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RestSection {
    /// Address for the management REST API.
    pub listen_addr: String,
}

impl Default for RestSection {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:24007".to_string(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"info"`, `"debug"`, `"warn"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// One `[[peers]]` entry.
#[derive(Debug, Deserialize)]
pub struct PeerSeed {
    /// Peer id as 64 hex characters. Derived from `name` when omitted, so
    /// a given name always seeds the same id.
    pub id: Option<String>,
    /// Human-readable peer name.
    pub name: String,
    /// Network addresses, preferred address first.
    pub addresses: Vec<String>,
}

impl PeerSeed {
    /// Resolve this entry into a directory record.
    pub fn into_peer(self) -> anyhow::Result<Peer> {
        let id = match self.id {
            Some(hex) => hex
                .parse::<PeerId>()
                .map_err(|e| anyhow::anyhow!("peer {:?}: {e}", self.name))?,
            None => PeerId::from_data(self.name.as_bytes()),
        };

        Ok(Peer {
            id,
            name: self.name,
            addresses: self.addresses,
        })
    }
}

impl CliConfig {
    /// Load config from a TOML file, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)?;
                let config: CliConfig = toml::from_str(&content)?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a TOML string (used in tests).
    #[cfg(test)]
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.rest.listen_addr, "0.0.0.0:24007");
        assert_eq!(config.log.level, "info");
        assert!(config.peers.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_toml(
            r#"
            [rest]
            listen_addr = "127.0.0.1:8080"

            [log]
            level = "debug"

            [[peers]]
            name = "node-1"
            addresses = ["10.0.0.1:24007"]

            [[peers]]
            id = "2222222222222222222222222222222222222222222222222222222222222222"
            name = "node-2"
            addresses = ["10.0.0.2:24007", "node-2.local:24007"]
            "#,
        )
        .unwrap();

        assert_eq!(config.rest.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.peers.len(), 2);
    }

    #[test]
    fn test_seed_without_id_derives_from_name() {
        let seed = PeerSeed {
            id: None,
            name: "node-1".to_string(),
            addresses: vec!["10.0.0.1:24007".to_string()],
        };
        let peer = seed.into_peer().unwrap();
        assert_eq!(peer.id, PeerId::from_data(b"node-1"));
    }

    #[test]
    fn test_seed_with_explicit_id() {
        let hex = "22".repeat(32);
        let seed = PeerSeed {
            id: Some(hex.clone()),
            name: "node-2".to_string(),
            addresses: vec![],
        };
        let peer = seed.into_peer().unwrap();
        assert_eq!(peer.id.to_string(), hex);
    }

    #[test]
    fn test_seed_with_malformed_id_fails() {
        let seed = PeerSeed {
            id: Some("not hex".to_string()),
            name: "node-3".to_string(),
            addresses: vec![],
        };
        assert!(seed.into_peer().is_err());
    }

    #[test]
    fn test_partial_config_keeps_section_defaults() {
        let config = CliConfig::from_toml(
            r#"
            [log]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.rest.listen_addr, "0.0.0.0:24007");
    }
}
