use anyhow::Result;
use clap::Args;
use colored::*;
use dialoguer::Confirm;

use veilpool_lib::identity::{IdentityFlow, IDENTITY_CONTRACT_ADDRESS};
use veilpool_lib::wallet::WalletSession;

use crate::{cli_delay, flow_spinner, print_header, TermSink};

/// 🛡️ Complete identity setup: deploy, sign, register
#[derive(Args, Debug)]
pub struct IdentityCommand {
    /// Skip confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl IdentityCommand {
    pub async fn execute(&self) -> Result<()> {
        print_header("🛡️", "Veilpool - Identity Setup");

        let mut wallet = WalletSession::new();
        wallet.connect_default();
        if let Some(account) = wallet.account() {
            println!(
                "{} {}",
                "Connected wallet:".bright_white(),
                account.bright_cyan()
            );
            println!();
        }

        let mut flow = IdentityFlow::new(cli_delay(), TermSink);

        // Step 1: deploy the identity contract.
        self.confirm_step("Deploy identity contract?")?;
        let pb = flow_spinner("Deploying identity contract...");
        flow.deploy_identity().await?;
        pb.finish_and_clear();

        println!(
            "{} {}",
            "Identity contract:".bright_white(),
            IDENTITY_CONTRACT_ADDRESS.bright_cyan()
        );
        println!();

        // Step 2: generate the proof signature.
        self.confirm_step("Generate proof signature?")?;
        let pb = flow_spinner("Generating proof signature...");
        flow.generate_signature().await?;
        pb.finish_and_clear();

        if let Some(signature) = flow.signature() {
            println!("{}", "Proof signature".bright_white());
            println!("   {}", signature.bright_black());
            println!();
        }

        // Step 3: register the compliance claim.
        self.confirm_step("Register compliance claim?")?;
        let pb = flow_spinner("Registering compliance claim...");
        flow.register_claim().await?;
        pb.finish_and_clear();

        println!();
        println!(
            "{} {}",
            "✅".bright_green(),
            "Identity verified".bright_green().bold()
        );
        println!("   Ready for anonymous transactions with regulatory compliance.");
        Ok(())
    }

    fn confirm_step(&self, prompt: &str) -> Result<()> {
        if self.yes {
            return Ok(());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("{} {}", "➡️".bright_blue(), prompt))
            .default(true)
            .interact()?;
        if !confirmed {
            anyhow::bail!("identity setup cancelled");
        }
        Ok(())
    }
}
