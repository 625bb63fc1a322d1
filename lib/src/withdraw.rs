//! Withdraw flow: search for notes by private key, withdraw them one by one.
//!
//! A search replaces the whole result set (no accumulation, no
//! de-duplication). Withdrawals are locked per note id, not per module, so
//! distinct notes can be in flight at once while a duplicate attempt on the
//! same note is refused. The transition is split into
//! [`WithdrawFlow::begin_withdraw`] / [`WithdrawFlow::finish_withdraw`] so
//! the lock is observable without timers; the async
//! [`WithdrawFlow::withdraw`] composes them around the simulated delay.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::delay::Delay;
use crate::error::{PoolError, Result};
use crate::notes::{NoteCommitment, NoteLookup, NoteStatus};
use crate::notify::{Notification, NotificationSink};

/// Simulated latency of the note search.
pub const SEARCH_DELAY: Duration = Duration::from_millis(2000);
/// Simulated latency of a single withdrawal.
pub const WITHDRAW_DELAY: Duration = Duration::from_millis(3000);

/// Proof that a withdrawal was admitted; consumed by `finish_withdraw`.
#[derive(Debug)]
pub struct WithdrawTicket {
    note_id: String,
    amount: String,
}

impl WithdrawTicket {
    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }
}

#[derive(Debug)]
pub struct WithdrawFlow<D, N, L> {
    notes: Vec<NoteCommitment>,
    in_flight: HashSet<String>,
    delay: D,
    sink: N,
    lookup: L,
}

impl<D: Delay, N: NotificationSink, L: NoteLookup> WithdrawFlow<D, N, L> {
    pub fn new(delay: D, sink: N, lookup: L) -> Self {
        Self {
            notes: Vec::new(),
            in_flight: HashSet::new(),
            delay,
            sink,
            lookup,
        }
    }

    pub fn notes(&self) -> &[NoteCommitment] {
        &self.notes
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn available_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_available()).count()
    }

    /// Sum of amounts over still-available notes.
    pub fn total_available(&self) -> f64 {
        self.notes
            .iter()
            .filter(|n| n.is_available())
            .map(NoteCommitment::amount_eth)
            .sum()
    }

    /// Total formatted to three decimals, as the interface displays it.
    pub fn total_available_display(&self) -> String {
        format!("{:.3}", self.total_available())
    }

    /// Search for notes intended for the holder of `private_key`.
    ///
    /// Replaces any prior result set and clears pending locks. Returns the
    /// number of notes found.
    pub async fn search(&mut self, private_key: &str) -> Result<usize> {
        if private_key.is_empty() {
            self.sink.notify(Notification::destructive(
                "Missing Private Key",
                "Please enter your private key to search for commitments.",
            ));
            return Err(PoolError::MissingField("private key"));
        }

        self.delay.wait(SEARCH_DELAY).await;

        self.notes = self.lookup.find_notes(private_key);
        self.in_flight.clear();
        let found = self.notes.len();
        debug!(found, "note search complete");
        self.sink.notify(Notification::success(
            "Notes Found",
            format!("Found {found} available commitments for withdrawal."),
        ));
        Ok(found)
    }

    /// Admit a withdrawal and lock the note.
    ///
    /// Returns `Ok(None)` when the note is already withdrawn (a no-op, per
    /// the one-way status transition). Unknown ids toast destructively; a
    /// duplicate attempt on a locked note is refused without a toast.
    pub fn begin_withdraw(&mut self, note_id: &str) -> Result<Option<WithdrawTicket>> {
        let Some(note) = self.notes.iter().find(|n| n.id == note_id) else {
            self.sink.notify(Notification::destructive(
                "Unknown Note",
                "No commitment with that id in the current results.",
            ));
            return Err(PoolError::UnknownNote(note_id.to_string()));
        };
        if self.in_flight.contains(note_id) {
            return Err(PoolError::WithdrawInFlight(note_id.to_string()));
        }
        if note.status == NoteStatus::Withdrawn {
            return Ok(None);
        }

        let ticket = WithdrawTicket {
            note_id: note.id.clone(),
            amount: note.amount.clone(),
        };
        self.in_flight.insert(ticket.note_id.clone());
        debug!(note_id, "withdrawal admitted");
        Ok(Some(ticket))
    }

    /// Commit an admitted withdrawal: unlock, mark withdrawn, toast.
    ///
    /// If a search replaced the result set while the withdrawal was in
    /// flight the record is simply gone and only the toast remains.
    pub fn finish_withdraw(&mut self, ticket: WithdrawTicket) -> String {
        self.in_flight.remove(&ticket.note_id);
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == ticket.note_id) {
            note.status = NoteStatus::Withdrawn;
        }
        debug!(note_id = %ticket.note_id, amount = %ticket.amount, "withdrawal committed");
        self.sink.notify(Notification::success(
            "Withdrawal Successful",
            format!("{} ETH withdrawn successfully to your wallet.", ticket.amount),
        ));
        ticket.amount
    }

    /// Withdraw a single note after the simulated delay.
    ///
    /// Returns the withdrawn amount, or `None` when the note was already
    /// withdrawn.
    pub async fn withdraw(&mut self, note_id: &str) -> Result<Option<String>> {
        let Some(ticket) = self.begin_withdraw(note_id)? else {
            return Ok(None);
        };

        self.delay.wait(WITHDRAW_DELAY).await;

        Ok(Some(self.finish_withdraw(ticket)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use crate::notes::MockNoteLookup;
    use crate::notify::{RecordingSink, Variant};

    fn flow() -> WithdrawFlow<NoDelay, RecordingSink, MockNoteLookup> {
        WithdrawFlow::new(NoDelay, RecordingSink::new(), MockNoteLookup)
    }

    #[tokio::test]
    async fn empty_private_key_is_rejected() {
        let mut flow = flow();
        let err = flow.search("").await.unwrap_err();
        assert_eq!(err, PoolError::MissingField("private key"));
        assert!(flow.notes().is_empty());
        assert_eq!(flow.sink().last().unwrap().variant, Variant::Destructive);
    }

    #[tokio::test]
    async fn search_yields_three_available_notes_totalling_2_5() {
        let mut flow = flow();
        let found = flow.search("anyKey").await.unwrap();

        assert_eq!(found, 3);
        assert_eq!(flow.available_count(), 3);
        assert!(flow.notes().iter().all(NoteCommitment::is_available));
        assert!((flow.total_available() - 2.5).abs() < 1e-9);
        assert_eq!(flow.total_available_display(), "2.500");
    }

    #[tokio::test]
    async fn withdraw_touches_exactly_one_note() {
        let mut flow = flow();
        flow.search("anyKey").await.unwrap();

        let amount = flow.withdraw("2").await.unwrap().unwrap();
        assert_eq!(amount, "1.2");

        for note in flow.notes() {
            if note.id == "2" {
                assert_eq!(note.status, NoteStatus::Withdrawn);
            } else {
                assert_eq!(note.status, NoteStatus::Available);
            }
        }
        assert!((flow.total_available() - 1.3).abs() < 1e-9);
        assert_eq!(flow.total_available_display(), "1.300");
    }

    #[tokio::test]
    async fn withdrawing_a_withdrawn_note_is_a_noop() {
        let mut flow = flow();
        flow.search("anyKey").await.unwrap();
        flow.withdraw("2").await.unwrap();
        let toasts_before = flow.sink().notifications().len();

        assert_eq!(flow.withdraw("2").await.unwrap(), None);
        assert!((flow.total_available() - 1.3).abs() < 1e-9);
        assert_eq!(flow.sink().notifications().len(), toasts_before);
    }

    #[tokio::test]
    async fn unknown_note_id_toasts_destructively() {
        let mut flow = flow();
        flow.search("anyKey").await.unwrap();

        let err = flow.withdraw("99").await.unwrap_err();
        assert_eq!(err, PoolError::UnknownNote("99".to_string()));
        assert_eq!(flow.sink().last().unwrap().title, "Unknown Note");
        assert_eq!(flow.available_count(), 3);
    }

    #[tokio::test]
    async fn lock_is_per_note_not_per_module() {
        let mut flow = flow();
        flow.search("anyKey").await.unwrap();

        let first = flow.begin_withdraw("1").unwrap().unwrap();
        // A different note may proceed while "1" is pending...
        let second = flow.begin_withdraw("2").unwrap().unwrap();
        // ...but "1" itself is locked.
        assert_eq!(
            flow.begin_withdraw("1").unwrap_err(),
            PoolError::WithdrawInFlight("1".to_string())
        );

        flow.finish_withdraw(first);
        flow.finish_withdraw(second);
        assert_eq!(flow.available_count(), 1);
        assert!((flow.total_available() - 0.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn repeated_search_overwrites_the_result_set() {
        let mut flow = flow();
        flow.search("firstKey").await.unwrap();
        flow.withdraw("1").await.unwrap();
        assert_eq!(flow.available_count(), 2);

        flow.search("secondKey").await.unwrap();
        assert_eq!(flow.available_count(), 3);
        assert!((flow.total_available() - 2.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn search_during_pending_withdraw_clears_the_lock() {
        let mut flow = flow();
        flow.search("anyKey").await.unwrap();
        let ticket = flow.begin_withdraw("1").unwrap().unwrap();

        flow.search("anyKey").await.unwrap();
        // The lock was cleared by the new result set, so the note can be
        // admitted again...
        assert!(flow.begin_withdraw("1").unwrap().is_some());
        // ...and the stale ticket commits against the fresh record.
        flow.finish_withdraw(ticket);
        assert_eq!(flow.available_count(), 2);
    }
}
