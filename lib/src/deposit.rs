//! Deposit flow: generate a commitment for a recipient, then deposit.
//!
//! The request lifecycle is fire-and-forget: a successful deposit resets
//! the whole request, so every deposit needs a freshly generated
//! commitment. No ledger is kept; the pool totals shown by frontends are
//! the static display values in [`crate::config`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delay::Delay;
use crate::error::{PoolError, Result};
use crate::mock;
use crate::notify::{Notification, NotificationSink};

/// Simulated latency of commitment generation.
pub const GENERATE_DELAY: Duration = Duration::from_millis(2000);
/// Simulated latency of the deposit itself.
pub const DEPOSIT_DELAY: Duration = Duration::from_millis(3000);

/// The in-progress deposit request. Created empty, reset to empty after a
/// successful deposit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub recipient_key: String,
    pub amount: String,
    pub commitment: Option<String>,
}

impl DepositRequest {
    pub fn is_empty(&self) -> bool {
        self.recipient_key.is_empty() && self.amount.is_empty() && self.commitment.is_none()
    }
}

#[derive(Debug)]
pub struct DepositFlow<D, N> {
    request: DepositRequest,
    delay: D,
    sink: N,
}

impl<D: Delay, N: NotificationSink> DepositFlow<D, N> {
    pub fn new(delay: D, sink: N) -> Self {
        Self {
            request: DepositRequest::default(),
            delay,
            sink,
        }
    }

    pub fn request(&self) -> &DepositRequest {
        &self.request
    }

    pub fn commitment(&self) -> Option<&str> {
        self.request.commitment.as_deref()
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Generate a commitment binding `recipient_key` and `amount`.
    ///
    /// Both inputs must be non-empty and the amount a positive decimal;
    /// otherwise a destructive toast is emitted and nothing changes. The
    /// commitment value itself is random, not derived (see [`crate::mock`]).
    pub async fn generate_commitment(&mut self, recipient_key: &str, amount: &str) -> Result<()> {
        if recipient_key.is_empty() || amount.is_empty() {
            self.sink.notify(Notification::destructive(
                "Missing Information",
                "Please provide both recipient's public key and amount.",
            ));
            let field = if recipient_key.is_empty() {
                "recipient key"
            } else {
                "amount"
            };
            return Err(PoolError::MissingField(field));
        }
        if !amount
            .parse::<f64>()
            .map_or(false, |v| v.is_finite() && v > 0.0)
        {
            self.sink.notify(Notification::destructive(
                "Invalid Amount",
                "Amount must be a positive number.",
            ));
            return Err(PoolError::InvalidAmount(amount.to_string()));
        }

        self.request.recipient_key = recipient_key.to_string();
        self.request.amount = amount.to_string();

        self.delay.wait(GENERATE_DELAY).await;

        self.request.commitment = Some(mock::random_commitment());
        debug!(amount, "commitment generated");
        self.sink.notify(Notification::success(
            "Commitment Generated",
            "Zero-knowledge commitment has been created successfully.".to_string(),
        ));
        Ok(())
    }

    /// Deposit the committed amount into the pool.
    ///
    /// Requires a previously generated commitment. On success the request
    /// is reset to empty; the deposited amount is returned for display.
    pub async fn deposit(&mut self) -> Result<String> {
        if self.request.commitment.is_none() {
            self.sink.notify(Notification::destructive(
                "No Commitment",
                "Please generate a commitment first.",
            ));
            return Err(PoolError::MissingCommitment);
        }

        self.delay.wait(DEPOSIT_DELAY).await;

        let amount = std::mem::take(&mut self.request).amount;
        debug!(%amount, "deposit committed, request reset");
        self.sink.notify(Notification::success(
            "Deposit Successful",
            format!("{amount} ETH deposited to privacy pool with commitment."),
        ));
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use crate::notify::{RecordingSink, Variant};

    fn flow() -> DepositFlow<NoDelay, RecordingSink> {
        DepositFlow::new(NoDelay, RecordingSink::new())
    }

    #[tokio::test]
    async fn empty_recipient_key_is_rejected() {
        let mut flow = flow();
        let err = flow.generate_commitment("", "1.0").await.unwrap_err();
        assert_eq!(err, PoolError::MissingField("recipient key"));
        assert!(flow.commitment().is_none());
        assert!(flow.request().is_empty());

        let toast = flow.sink().last().unwrap();
        assert_eq!(toast.variant, Variant::Destructive);
        assert_eq!(toast.title, "Missing Information");
    }

    #[tokio::test]
    async fn empty_amount_is_rejected() {
        let mut flow = flow();
        let err = flow.generate_commitment("0x04a1b2", "").await.unwrap_err();
        assert_eq!(err, PoolError::MissingField("amount"));
        assert!(flow.commitment().is_none());
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let mut flow = flow();
        for bad in ["0", "-1.5", "abc", "inf", "-inf", "NaN"] {
            let err = flow.generate_commitment("0x04a1b2", bad).await.unwrap_err();
            assert_eq!(err, PoolError::InvalidAmount(bad.to_string()));
        }
        assert!(flow.commitment().is_none());
        assert_eq!(flow.sink().destructive_count(), 6);
    }

    #[tokio::test]
    async fn commitment_has_nominal_length() {
        let mut flow = flow();
        flow.generate_commitment("0x04a1b2", "1.5").await.unwrap();

        let commitment = flow.commitment().unwrap();
        assert!(commitment.starts_with("0x"));
        assert_eq!(commitment.len(), 2 + 64);
        assert_eq!(flow.request().recipient_key, "0x04a1b2");
        assert_eq!(flow.request().amount, "1.5");
    }

    #[tokio::test]
    async fn deposit_without_commitment_is_rejected() {
        let mut flow = flow();
        let err = flow.deposit().await.unwrap_err();
        assert_eq!(err, PoolError::MissingCommitment);

        let toast = flow.sink().last().unwrap();
        assert_eq!(toast.variant, Variant::Destructive);
        assert_eq!(toast.title, "No Commitment");
    }

    #[tokio::test]
    async fn successful_deposit_resets_the_request() {
        let mut flow = flow();
        flow.generate_commitment("0x04a1b2", "2.5").await.unwrap();
        let amount = flow.deposit().await.unwrap();

        assert_eq!(amount, "2.5");
        assert!(flow.request().is_empty());
        assert_eq!(flow.sink().last().unwrap().title, "Deposit Successful");

        // A second deposit needs a fresh commitment.
        assert_eq!(flow.deposit().await.unwrap_err(), PoolError::MissingCommitment);
    }
}
