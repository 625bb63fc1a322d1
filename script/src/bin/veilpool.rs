//! Veilpool CLI - the terminal face of the mocked privacy pool
//!
//! This tool drives the three interface flows headlessly implemented in
//! `veilpool-lib`:
//! - Identity setup (deploy -> sign -> register)
//! - Deposits (commitment generation + deposit)
//! - Withdrawals (note discovery + per-note withdrawal)
//!
//! Usage:
//! ```shell
//! # Identity onboarding
//! cargo run -- identity
//!
//! # Deposit 0.5 ETH for a recipient
//! cargo run -- deposit --recipient-key 0x04a1b2... --amount 0.5 -y
//!
//! # Discover and withdraw notes
//! cargo run -- withdraw --private-key $PRIVATE_KEY
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use console::Term;
use std::process;

use veilpool_script::commands::{
    DepositCommand, IdentityCommand, StatusCommand, TransferCommand, WithdrawCommand,
};

#[derive(Parser)]
#[command(
    name = "veilpool",
    about = "🌫️ Veilpool - Anonymous transactions with built-in compliance",
    long_about = "Veilpool is a terminal interface for a mocked privacy pool.\n\nFeatures:\n• Three-step identity onboarding with compliance claims\n• Commitment generation and deposits\n• Note discovery and withdrawals\n• All chain and prover interactions are simulated",
    version = "1.0.0"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 🛡️ Complete identity setup (deploy, sign, register)
    Identity(IdentityCommand),
    /// 💰 Generate a commitment and deposit into the pool
    Deposit(DepositCommand),
    /// 💸 Search for notes and withdraw them
    Withdraw(WithdrawCommand),
    /// 📤 Submit the standalone transfer contract call
    Transfer(TransferCommand),
    /// 📊 Show networks, wallet session, and pool statistics
    Status(StatusCommand),
}

fn print_banner() {
    let term = Term::stdout();
    let _ = term.clear_screen();

    println!(
        "{}",
        r#"
    ██╗   ██╗███████╗██╗██╗     ██████╗  ██████╗  ██████╗ ██╗
    ██║   ██║██╔════╝██║██║     ██╔══██╗██╔═══██╗██╔═══██╗██║
    ██║   ██║█████╗  ██║██║     ██████╔╝██║   ██║██║   ██║██║
    ╚██╗ ██╔╝██╔══╝  ██║██║     ██╔═══╝ ██║   ██║██║   ██║██║
     ╚████╔╝ ███████╗██║███████╗██║     ╚██████╔╝╚██████╔╝███████╗
      ╚═══╝  ╚══════╝╚═╝╚══════╝╚═╝      ╚═════╝  ╚═════╝ ╚══════╝
    "#
        .bright_magenta()
        .bold()
    );

    println!(
        "{}",
        "    Privacy-preserving • Regulatory compliant"
            .bright_cyan()
            .italic()
    );
    println!(
        "{}",
        "    ═════════════════════════════════════════════".bright_black()
    );
    println!();
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables (VEILPOOL_RPC_URL, VEILPOOL_PROJECT_ID)
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    setup_logging(cli.verbose);
    tracing::debug!(verbose = cli.verbose, "logging initialised");

    print_banner();

    let result = match cli.command {
        Commands::Identity(cmd) => cmd.execute().await,
        Commands::Deposit(cmd) => cmd.execute().await,
        Commands::Withdraw(cmd) => cmd.execute().await,
        Commands::Transfer(cmd) => cmd.execute(),
        Commands::Status(cmd) => cmd.execute(),
    };

    match result {
        Ok(_) => {
            println!();
            println!(
                "{} {}",
                "✨".bright_green(),
                "Operation completed successfully!".bright_green().bold()
            );
        }
        Err(e) => {
            println!();
            eprintln!(
                "{} {}",
                "💥".bright_red(),
                "Operation failed!".bright_red().bold()
            );
            eprintln!("   {}", e.to_string().bright_red());
            println!();
            eprintln!("{} {}", "💡".bright_blue(), "Tips:".bright_blue().bold());
            eprintln!("   • Required inputs must be non-empty");
            eprintln!("   • Identity steps must run in order");
            eprintln!("   • Generate a commitment before depositing");
            eprintln!("   • Run with --verbose for detailed logs");

            process::exit(1);
        }
    }
}
