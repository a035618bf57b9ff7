//! Static metadata for the Soroban networks the app can target.
//!
//! A [`ChainDescriptor`] identifies one network instance: a short id used
//! as a key, a human-readable name, and the network passphrase that keeps
//! signed transactions from replaying across networks.

use serde::{Deserialize, Serialize};

/// Network passphrase for the SDF Futurenet.
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

/// Network passphrase for a local standalone (quickstart) network.
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

/// Metadata for one network the app can connect to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Short identifier, e.g. "futurenet".
    pub id: String,
    /// Human-readable network name shown in the UI.
    pub name: String,
    /// Passphrase identifying the network instance, mixed into every
    /// transaction signature to prevent cross-network replay.
    pub network_passphrase: String,
}

impl ChainDescriptor {
    pub fn new(id: &str, name: &str, network_passphrase: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            network_passphrase: network_passphrase.to_string(),
        }
    }
}

/// The ordered list of networks the app supports.
///
/// Futurenet first (the default target), then a local standalone network
/// for development against a quickstart container.
pub fn default_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor::new("futurenet", "Futurenet", FUTURENET_PASSPHRASE),
        ChainDescriptor::new("standalone", "Standalone", STANDALONE_PASSPHRASE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chains_ids_and_order() {
        let chains = default_chains();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].id, "futurenet");
        assert_eq!(chains[1].id, "standalone");
    }

    #[test]
    fn test_passphrases_nonempty_and_distinct() {
        let chains = default_chains();
        for chain in &chains {
            assert!(!chain.network_passphrase.is_empty());
        }
        assert_ne!(
            chains[0].network_passphrase,
            chains[1].network_passphrase
        );
    }

    #[test]
    fn test_descriptor_json_roundtrip() {
        let chain = ChainDescriptor::new("futurenet", "Futurenet", FUTURENET_PASSPHRASE);
        let json = serde_json::to_string(&chain).unwrap();
        assert!(json.contains("\"network_passphrase\""));
        let back: ChainDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }
}
