//! CLI command modules, one per interface tab plus the standalone
//! transfer control and a status display.

pub mod deposit;
pub mod identity;
pub mod status;
pub mod transfer;
pub mod withdraw;

pub use deposit::DepositCommand;
pub use identity::IdentityCommand;
pub use status::StatusCommand;
pub use transfer::TransferCommand;
pub use withdraw::WithdrawCommand;
