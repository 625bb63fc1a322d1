use anyhow::Result;
use clap::Args;
use colored::*;
use serde_json::json;

use veilpool_lib::config::{APP_NAME, NETWORKS, POOL_STATS, WALLETCONNECT_PROJECT_ID};
use veilpool_lib::wallet::WalletSession;

use crate::print_header;

/// 📊 Show networks, wallet session, and pool statistics
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// Print machine-readable JSON instead of the formatted table
    #[arg(long)]
    pub json: bool,
}

impl StatusCommand {
    pub fn execute(&self) -> Result<()> {
        let mut wallet = WalletSession::new();
        wallet.connect_default();

        let project_id = std::env::var("VEILPOOL_PROJECT_ID")
            .unwrap_or_else(|_| WALLETCONNECT_PROJECT_ID.to_string());
        let rpc_override = std::env::var("VEILPOOL_RPC_URL").ok();

        if self.json {
            let payload = json!({
                "app": APP_NAME,
                "project_id": project_id,
                "account": wallet.account(),
                "networks": NETWORKS,
                "rpc_override": rpc_override,
                "pool_stats": POOL_STATS,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        print_header("📊", &format!("{APP_NAME} - Status"));

        println!(
            "{} {}",
            "Account:".bright_white(),
            wallet.account().unwrap_or("(disconnected)").bright_cyan()
        );
        println!(
            "{} {}",
            "Project id:".bright_white(),
            project_id.bright_black()
        );
        println!();

        println!("{}", "Networks".bright_white().bold());
        for network in &NETWORKS {
            let rpc = rpc_override.as_deref().unwrap_or(network.rpc_url);
            println!(
                "  {:>10}  chain {:<10}  {}",
                network.name.bright_cyan(),
                network.chain_id,
                rpc.bright_black()
            );
        }
        println!();

        println!("{}", "Pool statistics".bright_white().bold());
        println!(
            "  {:>8} {}",
            POOL_STATS.active_commitments.bright_cyan(),
            "active commitments".bright_black()
        );
        println!(
            "  {:>8} {}",
            POOL_STATS.verified_identities.bright_cyan(),
            "verified identities".bright_black()
        );
        println!(
            "  {:>8} {}",
            POOL_STATS.total_value_eth.bright_cyan(),
            "total value (ETH)".bright_black()
        );
        Ok(())
    }
}
