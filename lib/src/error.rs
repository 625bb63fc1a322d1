//! Error types for the veilpool flows.
//!
//! The taxonomy is validation-only: simulated operations never fail once
//! started, so there is no operational-failure category. Each flow handles
//! its own errors locally by skipping the transition and, where the UI
//! would toast, emitting a destructive notification.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// A required input field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Amount must be a positive decimal string.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// An identity action was invoked out of step order.
    #[error("action not valid in step {actual:?}, expected {expected:?}")]
    StepOutOfOrder {
        expected: crate::identity::IdentityStep,
        actual: crate::identity::IdentityStep,
    },

    /// Deposit attempted before a commitment was generated.
    #[error("no commitment generated")]
    MissingCommitment,

    /// Withdraw targeted a note id absent from the current result set.
    #[error("unknown note id: {0}")]
    UnknownNote(String),

    /// A withdrawal for this note id is already pending.
    #[error("withdrawal already in flight for note {0}")]
    WithdrawInFlight(String),

    /// Contract call carries no interface definition.
    #[error("contract interface is empty")]
    EmptyInterface,
}

pub type Result<T> = std::result::Result<T, PoolError>;
