//! Identity onboarding state machine.
//!
//! Three strictly sequential stages: deploy the identity contract, generate
//! a proof signature, register the compliance claim. The step never moves
//! backwards and never skips ahead; invoking an action outside its step
//! returns [`PoolError::StepOutOfOrder`] with no state change and no toast
//! (the UI equivalent is a disabled button).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delay::Delay;
use crate::error::{PoolError, Result};
use crate::mock;
use crate::notify::{Notification, NotificationSink};

/// Simulated latency of deploying the identity contract.
pub const DEPLOY_DELAY: Duration = Duration::from_millis(2000);
/// Simulated latency of generating the proof signature.
pub const SIGNATURE_DELAY: Duration = Duration::from_millis(1500);
/// Simulated latency of registering the compliance claim.
pub const CLAIM_DELAY: Duration = Duration::from_millis(1500);

/// Identity contract address shown once deployment completes.
pub const IDENTITY_CONTRACT_ADDRESS: &str = "0x8Ba1f109551bD432803012645Hac136c05Cef4E";

/// Current stage of an identity session. Strictly forward-progressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityStep {
    AwaitingDeployment,
    AwaitingSignature,
    AwaitingClaim,
    Complete,
}

impl IdentityStep {
    /// 1-based step indicator for display, saturating at the last stage.
    pub fn indicator(self) -> u8 {
        match self {
            Self::AwaitingDeployment => 1,
            Self::AwaitingSignature => 2,
            Self::AwaitingClaim | Self::Complete => 3,
        }
    }
}

/// The identity onboarding session and its collaborators.
#[derive(Debug)]
pub struct IdentityFlow<D, N> {
    step: IdentityStep,
    is_deployed: bool,
    signature: Option<String>,
    claim_registered: bool,
    delay: D,
    sink: N,
}

impl<D: Delay, N: NotificationSink> IdentityFlow<D, N> {
    pub fn new(delay: D, sink: N) -> Self {
        Self {
            step: IdentityStep::AwaitingDeployment,
            is_deployed: false,
            signature: None,
            claim_registered: false,
            delay,
            sink,
        }
    }

    pub fn step(&self) -> IdentityStep {
        self.step
    }

    pub fn is_deployed(&self) -> bool {
        self.is_deployed
    }

    /// Present only once the session has advanced past signature generation.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn claim_registered(&self) -> bool {
        self.claim_registered
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Deploy the (simulated) identity contract.
    ///
    /// Valid only in `AwaitingDeployment`; advances to `AwaitingSignature`.
    pub async fn deploy_identity(&mut self) -> Result<()> {
        self.expect_step(IdentityStep::AwaitingDeployment)?;

        self.delay.wait(DEPLOY_DELAY).await;

        self.is_deployed = true;
        self.step = IdentityStep::AwaitingSignature;
        debug!(step = ?self.step, "identity contract deployed");
        self.sink.notify(Notification::success(
            "Identity deployed",
            "Your onchain identity is now active.".to_string(),
        ));
        Ok(())
    }

    /// Generate a fresh proof signature.
    ///
    /// Valid only in `AwaitingSignature`; advances to `AwaitingClaim`.
    pub async fn generate_signature(&mut self) -> Result<()> {
        self.expect_step(IdentityStep::AwaitingSignature)?;

        self.delay.wait(SIGNATURE_DELAY).await;

        self.signature = Some(mock::random_signature());
        self.step = IdentityStep::AwaitingClaim;
        debug!(step = ?self.step, "proof signature generated");
        self.sink.notify(Notification::success(
            "Signature generated",
            "Ready to register compliance claim.".to_string(),
        ));
        Ok(())
    }

    /// Register the compliance claim, completing the session.
    ///
    /// Valid only in `AwaitingClaim`; advances to `Complete`.
    pub async fn register_claim(&mut self) -> Result<()> {
        self.expect_step(IdentityStep::AwaitingClaim)?;

        self.delay.wait(CLAIM_DELAY).await;

        self.claim_registered = true;
        self.step = IdentityStep::Complete;
        debug!(step = ?self.step, "compliance claim registered");
        self.sink.notify(Notification::success(
            "Setup complete",
            "Identity verified and ready for transactions.".to_string(),
        ));
        Ok(())
    }

    fn expect_step(&self, expected: IdentityStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(PoolError::StepOutOfOrder {
                expected,
                actual: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use crate::notify::{RecordingSink, Variant};

    fn flow() -> IdentityFlow<NoDelay, RecordingSink> {
        IdentityFlow::new(NoDelay, RecordingSink::new())
    }

    #[tokio::test]
    async fn steps_advance_in_order() {
        let mut flow = flow();
        assert_eq!(flow.step(), IdentityStep::AwaitingDeployment);
        assert!(flow.signature().is_none());

        flow.deploy_identity().await.unwrap();
        assert_eq!(flow.step(), IdentityStep::AwaitingSignature);
        assert!(flow.is_deployed());
        assert!(flow.signature().is_none());

        flow.generate_signature().await.unwrap();
        assert_eq!(flow.step(), IdentityStep::AwaitingClaim);
        let signature = flow.signature().unwrap().to_string();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 2 + 128);

        flow.register_claim().await.unwrap();
        assert_eq!(flow.step(), IdentityStep::Complete);
        assert!(flow.claim_registered());
        // Signature survives completion unchanged.
        assert_eq!(flow.signature().unwrap(), signature);
    }

    #[tokio::test]
    async fn register_claim_fails_before_deployment() {
        let mut flow = flow();
        let err = flow.register_claim().await.unwrap_err();
        assert_eq!(
            err,
            PoolError::StepOutOfOrder {
                expected: IdentityStep::AwaitingClaim,
                actual: IdentityStep::AwaitingDeployment,
            }
        );
        assert_eq!(flow.step(), IdentityStep::AwaitingDeployment);
        assert!(!flow.claim_registered());
        assert!(flow.sink().notifications().is_empty());
    }

    #[tokio::test]
    async fn deploy_cannot_rerun_once_deployed() {
        let mut flow = flow();
        flow.deploy_identity().await.unwrap();
        let err = flow.deploy_identity().await.unwrap_err();
        assert!(matches!(err, PoolError::StepOutOfOrder { .. }));
        // No regression, no extra toast.
        assert_eq!(flow.step(), IdentityStep::AwaitingSignature);
        assert_eq!(flow.sink().notifications().len(), 1);
    }

    #[tokio::test]
    async fn indicator_tracks_furthest_stage() {
        let mut flow = flow();
        assert_eq!(flow.step().indicator(), 1);
        flow.deploy_identity().await.unwrap();
        assert_eq!(flow.step().indicator(), 2);
        flow.generate_signature().await.unwrap();
        assert_eq!(flow.step().indicator(), 3);
        flow.register_claim().await.unwrap();
        // Completion stays on the last indicator.
        assert_eq!(flow.step().indicator(), 3);
    }

    #[tokio::test]
    async fn each_stage_emits_one_success_toast() {
        let mut flow = flow();
        flow.deploy_identity().await.unwrap();
        flow.generate_signature().await.unwrap();
        flow.register_claim().await.unwrap();

        let notes = flow.sink().notifications();
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(|n| n.variant == Variant::Default));
        assert_eq!(notes[0].title, "Identity deployed");
        assert_eq!(notes[1].title, "Signature generated");
        assert_eq!(notes[2].title, "Setup complete");
    }
}
