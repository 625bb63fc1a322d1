//! Contract-write collaborator.
//!
//! One capability: submit a named contract call with an ordered argument
//! list against a target address. The shipped demo call carries an empty
//! interface definition and a placeholder address, so submission is
//! rejected by construction until a real deployment fills both in.

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, Result};
use crate::mock;

/// Target address of the demo transfer call. Replace after deployment.
pub const PLACEHOLDER_CONTRACT_ADDRESS: &str = "0xYourContractAddressHere";

/// A write call against a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    pub address: String,
    pub function: String,
    /// Ordered argument list, stringly encoded.
    pub args: Vec<String>,
    /// Interface entries (function signatures). Empty means unusable.
    pub interface: Vec<String>,
}

impl ContractCall {
    /// The standalone transfer control's call: `deposit` on the placeholder
    /// address with an empty interface.
    pub fn transfer_demo() -> Self {
        Self {
            address: PLACEHOLDER_CONTRACT_ADDRESS.to_string(),
            function: "deposit".to_string(),
            args: vec![
                "0xd2135CfB216b74109775236E36d4b433F1DF507B".to_string(),
                "0xA0Cf798816D4b9b9866b5330EEa46a18382f251e".to_string(),
                "123".to_string(),
            ],
            interface: Vec::new(),
        }
    }
}

/// Submits write calls. Returns a transaction hash on success.
pub trait ContractWriter {
    fn write_contract(&mut self, call: &ContractCall) -> Result<String>;
}

/// Mock writer: accepts any call with a non-empty interface and fabricates
/// a transaction hash for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockContractWriter;

impl ContractWriter for MockContractWriter {
    fn write_contract(&mut self, call: &ContractCall) -> Result<String> {
        if call.interface.is_empty() {
            return Err(PoolError::EmptyInterface);
        }
        Ok(mock::random_hex(64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_demo_is_rejected() {
        let call = ContractCall::transfer_demo();
        assert_eq!(call.address, PLACEHOLDER_CONTRACT_ADDRESS);
        assert_eq!(call.function, "deposit");
        assert_eq!(call.args.len(), 3);

        let err = MockContractWriter.write_contract(&call).unwrap_err();
        assert_eq!(err, PoolError::EmptyInterface);
    }

    #[test]
    fn call_with_interface_yields_a_tx_hash() {
        let mut call = ContractCall::transfer_demo();
        call.interface
            .push("deposit(address,address,uint256)".to_string());

        let hash = MockContractWriter.write_contract(&call).unwrap();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 2 + 64);
    }
}
