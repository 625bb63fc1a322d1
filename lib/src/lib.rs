//! Veilpool core library
//!
//! Headless flow state machines for the veilpool privacy-pool interface.
//! Three independent modules drive the whole product surface:
//!
//! - Identity onboarding: deploy identity -> generate signature -> register claim
//! - Deposit: generate a commitment for a recipient, then deposit
//! - Withdraw: search notes by private key, then withdraw individual notes
//!
//! Every operation that would touch a chain or a prover is simulated: a
//! fixed delay followed by a guaranteed state transition, with pseudo-random
//! hex strings standing in for cryptographic output. The state machines are
//! fully renderer-independent; a frontend supplies a [`notify::NotificationSink`]
//! for toasts and a [`delay::Delay`] for the simulated latency, and tests
//! substitute no-op implementations of both.

pub mod config;
pub mod contract;
pub mod delay;
pub mod deposit;
pub mod error;
pub mod identity;
pub mod mock;
pub mod notes;
pub mod notify;
pub mod wallet;
pub mod withdraw;

pub use error::{PoolError, Result};
