//! Simulated-latency seam.
//!
//! Every "network call" in veilpool is a fixed delay followed by a
//! transition that always commits. The delay sits behind a trait so the
//! frontends run real timers while tests complete instantly, and so a
//! future real backend could slot in fallible work without reshaping the
//! state machines.

use std::future::{ready, Future};
use std::time::Duration;

pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Real wall-clock delay on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Completes immediately. For headless tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) -> impl Future<Output = ()> {
        ready(())
    }
}
