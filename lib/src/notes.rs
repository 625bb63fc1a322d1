//! Note commitments and the lookup collaborator.
//!
//! A note commitment is a claimable deposit record discovered by searching
//! with a private key. Discovery is an external concern behind
//! [`NoteLookup`]; the library ships the fixed mock set the interface has
//! always displayed.

use serde::{Deserialize, Serialize};

/// Availability of a note. The transition is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    Available,
    Withdrawn,
}

/// A record representing a claimable deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCommitment {
    /// Unique within one result set.
    pub id: String,
    /// Positive decimal ETH amount.
    pub amount: String,
    pub commitment: String,
    /// ISO-8601 instant.
    pub timestamp: String,
    pub status: NoteStatus,
}

impl NoteCommitment {
    /// Amount as a number for totals; malformed amounts count as zero.
    pub fn amount_eth(&self) -> f64 {
        self.amount.parse().unwrap_or(0.0)
    }

    pub fn is_available(&self) -> bool {
        self.status == NoteStatus::Available
    }
}

/// External collaborator that resolves a private key to the notes intended
/// for its holder.
pub trait NoteLookup {
    fn find_notes(&self, private_key: &str) -> Vec<NoteCommitment>;
}

/// Fixed mock result set: three available notes totalling 2.5 ETH.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockNoteLookup;

impl NoteLookup for MockNoteLookup {
    fn find_notes(&self, _private_key: &str) -> Vec<NoteCommitment> {
        vec![
            NoteCommitment {
                id: "1".to_string(),
                amount: "0.5".to_string(),
                commitment: "0xa1b2c3d4e5f6789abcdef0123456789abcdef0123456789abcdef0123456789ab"
                    .to_string(),
                timestamp: "2024-01-15T10:30:00Z".to_string(),
                status: NoteStatus::Available,
            },
            NoteCommitment {
                id: "2".to_string(),
                amount: "1.2".to_string(),
                commitment: "0xb2c3d4e5f6789abcdef0123456789abcdef0123456789abcdef0123456789abc1"
                    .to_string(),
                timestamp: "2024-01-14T15:45:00Z".to_string(),
                status: NoteStatus::Available,
            },
            NoteCommitment {
                id: "3".to_string(),
                amount: "0.8".to_string(),
                commitment: "0xc3d4e5f6789abcdef0123456789abcdef0123456789abcdef0123456789abcd2"
                    .to_string(),
                timestamp: "2024-01-13T09:20:00Z".to_string(),
                status: NoteStatus::Available,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_lookup_returns_three_available_notes() {
        let notes = MockNoteLookup.find_notes("anyKey");
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(NoteCommitment::is_available));

        let total: f64 = notes.iter().map(NoteCommitment::amount_eth).sum();
        assert!((total - 2.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_amount_counts_as_zero() {
        let note = NoteCommitment {
            id: "x".to_string(),
            amount: "not-a-number".to_string(),
            commitment: "0x00".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            status: NoteStatus::Available,
        };
        assert_eq!(note.amount_eth(), 0.0);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&NoteStatus::Withdrawn).unwrap();
        assert_eq!(json, "\"withdrawn\"");
    }
}
