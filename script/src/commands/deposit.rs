use anyhow::Result;
use clap::Args;
use colored::*;
use dialoguer::{Confirm, Input};

use veilpool_lib::config::POOL_STATS;
use veilpool_lib::deposit::DepositFlow;

use crate::{abbreviate_hex, cli_delay, flow_spinner, print_header, TermSink};

/// 💰 Generate a commitment and deposit into the privacy pool
#[derive(Args, Debug)]
pub struct DepositCommand {
    /// Recipient's public key (will prompt if not provided)
    #[arg(long, short = 'k')]
    pub recipient_key: Option<String>,

    /// Amount of ETH to deposit
    #[arg(long, short = 'a')]
    pub amount: Option<String>,

    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DepositCommand {
    pub async fn execute(&self) -> Result<()> {
        print_header("💰", "Veilpool - Deposit");

        let recipient_key = match &self.recipient_key {
            Some(key) => key.clone(),
            None => Input::new()
                .with_prompt(format!("{} Recipient's public key", "🔑".bright_yellow()))
                .interact()?,
        };

        let amount = match &self.amount {
            Some(amt) => amt.clone(),
            None => Input::new()
                .with_prompt(format!("{} Amount (ETH)", "🪙".bright_yellow()))
                .validate_with(|input: &String| -> Result<(), &str> {
                    match input.parse::<f64>() {
                        Ok(v) if v > 0.0 => Ok(()),
                        _ => Err("Please enter a positive amount"),
                    }
                })
                .interact()?,
        };

        let mut flow = DepositFlow::new(cli_delay(), TermSink);

        let pb = flow_spinner("Generating zero-knowledge commitment...");
        let generated = flow.generate_commitment(&recipient_key, &amount).await;
        pb.finish_and_clear();
        generated?;

        if let Some(commitment) = flow.commitment() {
            println!();
            println!("{}", "Generated commitment".bright_white());
            println!("   {}", commitment.bright_black());
            println!(
                "   {} {}",
                "[Zero Knowledge Proof]".bright_magenta(),
                "[Privacy Preserved]".bright_magenta()
            );
            println!();
        }

        println!("{}", "📋 Ready to Deposit".bright_green().bold());
        println!("{}", "─".repeat(30).bright_black());
        println!("{} {} ETH", "Amount:".bright_white(), amount.bright_cyan());
        println!(
            "{} {}",
            "Recipient:".bright_white(),
            abbreviate_hex(&recipient_key).bright_cyan()
        );

        if !self.yes {
            println!();
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "{} Deposit {} ETH to the privacy pool?",
                    "⚠️".bright_yellow(),
                    amount.bright_red().bold()
                ))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("{} Deposit cancelled by user", "🚫".bright_red());
                return Ok(());
            }
        }

        let pb = flow_spinner("Processing deposit...");
        let deposited = flow.deposit().await;
        pb.finish_and_clear();
        deposited?;

        println!();
        println!("{}", "Pool statistics".bright_white().bold());
        println!(
            "   {} {}",
            POOL_STATS.total_commitments.bright_cyan(),
            "total commitments".bright_black()
        );
        println!(
            "   {} {}",
            POOL_STATS.total_pool_eth.bright_cyan(),
            "total pool (ETH)".bright_black()
        );
        Ok(())
    }
}
