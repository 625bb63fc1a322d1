use anyhow::Result;
use clap::Args;
use colored::*;
use dialoguer::{Input, Password};

use veilpool_lib::notes::NoteStatus;
use veilpool_lib::notes::MockNoteLookup;
use veilpool_lib::withdraw::WithdrawFlow;
use veilpool_lib::PoolError;

use crate::{abbreviate_hex, cli_delay, flow_spinner, print_header, TermSink};

/// 💸 Search for note commitments and withdraw them
#[derive(Args, Debug)]
pub struct WithdrawCommand {
    /// Private key used to discover your commitments (will prompt if not provided)
    #[arg(long, short = 'p')]
    pub private_key: Option<String>,
}

impl WithdrawCommand {
    pub async fn execute(&self) -> Result<()> {
        print_header("💸", "Veilpool - Withdraw");

        let private_key = match &self.private_key {
            Some(key) => key.clone(),
            None => {
                println!(
                    "{} {}",
                    "🔐".bright_blue(),
                    "Your private key is used locally to identify commitments intended for you"
                        .bright_cyan()
                );
                Password::new()
                    .with_prompt("Your private key")
                    .interact()?
            }
        };

        let mut flow = WithdrawFlow::new(cli_delay(), TermSink, MockNoteLookup);

        let pb = flow_spinner("Searching for commitments...");
        let searched = flow.search(&private_key).await;
        pb.finish_and_clear();
        searched?;

        loop {
            println!();
            self.render_notes(&flow);

            let note_id: String = Input::new()
                .with_prompt("Note id to withdraw (blank to finish)")
                .allow_empty(true)
                .interact()?;
            if note_id.is_empty() {
                break;
            }

            let pb = flow_spinner("Processing withdrawal...");
            let outcome = flow.withdraw(&note_id).await;
            pb.finish_and_clear();

            match outcome {
                Ok(Some(_)) => {}
                Ok(None) => {
                    println!(
                        "{} Note {} was already withdrawn",
                        "ℹ️".bright_blue(),
                        note_id.bright_cyan()
                    );
                }
                // Destructive toast already shown; keep the session going.
                Err(PoolError::UnknownNote(_)) => {}
                Err(e) => return Err(e.into()),
            }

            if flow.available_count() == 0 {
                println!();
                println!(
                    "{} {}",
                    "🎉".bright_green(),
                    "All available notes withdrawn".bright_green().bold()
                );
                break;
            }
        }

        Ok(())
    }

    fn render_notes<D, N, L>(&self, flow: &WithdrawFlow<D, N, L>)
    where
        D: veilpool_lib::delay::Delay,
        N: veilpool_lib::notify::NotificationSink,
        L: veilpool_lib::notes::NoteLookup,
    {
        println!(
            "{} {}",
            "📒 Available Commitments".bright_green().bold(),
            format!("({} available)", flow.available_count()).bright_black()
        );
        println!("{}", "─".repeat(60).bright_black());

        for note in flow.notes() {
            let status = match note.status {
                NoteStatus::Available => "Available".bright_green(),
                NoteStatus::Withdrawn => "Withdrawn".bright_black(),
            };
            println!(
                "  [{}] {:>5} ETH  {}  {}  {}",
                note.id.bright_cyan(),
                note.amount.bright_white(),
                status,
                abbreviate_hex(&note.commitment).bright_black(),
                note.timestamp.bright_black()
            );
        }

        println!("{}", "─".repeat(60).bright_black());
        println!(
            "  {} {} ETH",
            "Total available to withdraw:".bright_white(),
            flow.total_available_display().bright_cyan().bold()
        );
    }
}
