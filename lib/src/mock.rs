//! Pseudo-random stand-ins for cryptographic output.
//!
//! Commitments and signatures here are random hex, not derived from their
//! inputs. The whole mocked surface funnels through [`random_hex`], so a
//! real derivation scheme could replace it in one place.

use rand::{rngs::OsRng, RngCore};

/// Nominal length of a commitment in hex characters (32 bytes).
pub const COMMITMENT_HEX_LEN: usize = 64;

/// Nominal length of a proof signature in hex characters (64 bytes).
pub const SIGNATURE_HEX_LEN: usize = 128;

/// A `0x`-prefixed random hex string of `hex_len` characters.
///
/// `hex_len` must be even; the value is drawn from the OS entropy source
/// the same way real note secrets would be.
pub fn random_hex(hex_len: usize) -> String {
    debug_assert!(hex_len % 2 == 0, "hex length must be even");
    let mut bytes = vec![0u8; hex_len / 2];
    OsRng.fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

/// Mock commitment value: 0x + 64 hex characters.
pub fn random_commitment() -> String {
    random_hex(COMMITMENT_HEX_LEN)
}

/// Mock proof signature: 0x + 128 hex characters.
pub fn random_signature() -> String {
    random_hex(SIGNATURE_HEX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hex_has_prefix_and_length() {
        let value = random_hex(64);
        assert!(value.starts_with("0x"));
        assert_eq!(value.len(), 2 + 64);
        assert!(value[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn values_differ_between_calls() {
        assert_ne!(random_commitment(), random_commitment());
        assert_ne!(random_signature(), random_signature());
    }
}
