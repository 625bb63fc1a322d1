//! Wallet-connection collaborator.
//!
//! The flows only consume an implicit "connected account" context; the
//! connect/disconnect affordance lives here. There is no real provider
//! behind it, so connecting without an explicit account yields the fixed
//! demo account the interface has always shown.

/// Demo account displayed by the identity flow.
pub const DEFAULT_ACCOUNT: &str = "0x742d35Cc6734C0532925a3b8D97F165b74A8d5a8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    Disconnected,
    Connected { account: String },
}

#[derive(Debug, Clone)]
pub struct WalletSession {
    status: WalletStatus,
}

impl WalletSession {
    pub fn new() -> Self {
        Self {
            status: WalletStatus::Disconnected,
        }
    }

    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.status, WalletStatus::Connected { .. })
    }

    pub fn account(&self) -> Option<&str> {
        match &self.status {
            WalletStatus::Connected { account } => Some(account),
            WalletStatus::Disconnected => None,
        }
    }

    pub fn connect(&mut self, account: &str) {
        self.status = WalletStatus::Connected {
            account: account.to_string(),
        };
    }

    /// Connect the fixed demo account.
    pub fn connect_default(&mut self) {
        self.connect(DEFAULT_ACCOUNT);
    }

    pub fn disconnect(&mut self) {
        self.status = WalletStatus::Disconnected;
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}
