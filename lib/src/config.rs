//! Static chain configuration and display values.
//!
//! The network catalogue feeds the wallet-connection surface only; none of
//! the flow logic reads it. Pool statistics are fixed display values, not
//! derived from any committed state.

use serde::Serialize;

pub const APP_NAME: &str = "Veilpool";

/// WalletConnect project id placeholder; override via `VEILPOOL_PROJECT_ID`.
pub const WALLETCONNECT_PROJECT_ID: &str = "<WALLETCONNECT_PROJECT_ID>";

/// A supported network with its transport endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Network {
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_url: &'static str,
}

/// Supported networks, default first.
pub const NETWORKS: [Network; 3] = [
    Network {
        name: "mainnet",
        chain_id: 1,
        rpc_url: "https://cloudflare-eth.com",
    },
    Network {
        name: "sepolia",
        chain_id: 11_155_111,
        rpc_url: "https://rpc.sepolia.org",
    },
    Network {
        name: "base",
        chain_id: 8453,
        rpc_url: "https://mainnet.base.org",
    },
];

pub fn default_network() -> &'static Network {
    &NETWORKS[0]
}

pub fn network_by_name(name: &str) -> Option<&'static Network> {
    NETWORKS.iter().find(|n| n.name.eq_ignore_ascii_case(name))
}

/// Fixed interface display statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoolStats {
    pub total_commitments: &'static str,
    pub total_pool_eth: &'static str,
    pub active_commitments: &'static str,
    pub verified_identities: &'static str,
    pub total_value_eth: &'static str,
}

pub const POOL_STATS: PoolStats = PoolStats {
    total_commitments: "12,847",
    total_pool_eth: "2,847.5",
    active_commitments: "12.4K",
    verified_identities: "847",
    total_value_eth: "1.2M",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_lookup_is_case_insensitive() {
        assert_eq!(network_by_name("Base").unwrap().chain_id, 8453);
        assert!(network_by_name("goerli").is_none());
    }

    #[test]
    fn default_network_is_mainnet() {
        assert_eq!(default_network().name, "mainnet");
        assert_eq!(default_network().chain_id, 1);
    }
}
