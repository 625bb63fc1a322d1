use anyhow::Result;
use clap::Args;
use colored::*;
use dialoguer::Confirm;

use veilpool_lib::contract::{ContractCall, ContractWriter, MockContractWriter};
use veilpool_lib::PoolError;

use crate::{abbreviate_hex, print_header};

/// 📤 Submit the standalone transfer contract call (non-functional demo)
#[derive(Args, Debug)]
pub struct TransferCommand {
    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TransferCommand {
    pub fn execute(&self) -> Result<()> {
        print_header("📤", "Veilpool - Transfer");

        let call = ContractCall::transfer_demo();

        println!("{}", "📋 Contract Call".bright_green().bold());
        println!("{}", "─".repeat(30).bright_black());
        println!(
            "{} {}",
            "Contract:".bright_white(),
            call.address.bright_cyan()
        );
        println!(
            "{} {}",
            "Function:".bright_white(),
            call.function.bright_cyan()
        );
        for (i, arg) in call.args.iter().enumerate() {
            println!(
                "{} {}",
                format!("Arg {i}:").bright_white(),
                abbreviate_hex(arg).bright_cyan()
            );
        }
        println!(
            "{} {}",
            "Interface:".bright_white(),
            if call.interface.is_empty() {
                "(empty)".bright_yellow()
            } else {
                format!("{} entries", call.interface.len()).bright_cyan()
            }
        );

        if !self.yes {
            println!();
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "{} Submit this contract call?",
                    "⚠️".bright_yellow()
                ))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("{} Transfer cancelled by user", "🚫".bright_red());
                return Ok(());
            }
        }

        match MockContractWriter.write_contract(&call) {
            Ok(tx_hash) => {
                println!();
                println!(
                    "{} {} {}",
                    "🎉".bright_green(),
                    "Call submitted:".bright_green().bold(),
                    tx_hash.bright_cyan()
                );
            }
            Err(PoolError::EmptyInterface) => {
                // Expected: the demo call ships with no interface and a
                // placeholder address.
                println!();
                println!(
                    "{} {}",
                    "⚠️".bright_yellow(),
                    "Contract call rejected".bright_yellow().bold()
                );
                println!("   The interface definition is empty and the target address is a");
                println!("   placeholder; fill both in after deploying the pool contract.");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
