//! Veilpool script library
//!
//! Shared terminal plumbing for the veilpool CLI: the colored toast sink
//! the flow state machines notify into, spinner construction for the
//! simulated network latency, and a couple of formatting helpers used by
//! every command.

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use veilpool_lib::delay::TokioDelay;
use veilpool_lib::notify::{Notification, NotificationSink, Variant};

/// Renders flow notifications as colored terminal toasts.
///
/// Success toasts go to stdout, destructive ones to stderr, mirroring the
/// web interface's default/destructive toast variants.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermSink;

impl NotificationSink for TermSink {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            variant = ?notification.variant,
            "toast emitted"
        );
        match notification.variant {
            Variant::Default => {
                println!(
                    "{} {}",
                    "🔔".bright_green(),
                    notification.title.bright_green().bold()
                );
                println!("   {}", notification.description.bright_white());
            }
            Variant::Destructive => {
                eprintln!(
                    "{} {}",
                    "❌".bright_red(),
                    notification.title.bright_red().bold()
                );
                eprintln!("   {}", notification.description.bright_yellow());
            }
        }
    }
}

/// Spinner shown while a simulated operation's delay is pending.
pub fn flow_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// The delay implementation every CLI-driven flow runs on.
pub fn cli_delay() -> TokioDelay {
    TokioDelay
}

/// Section header used by every command.
pub fn print_header(icon: &str, title: &str) {
    println!("{} {}", icon, title.bright_cyan().bold());
    println!("{}", "═".repeat(50).bright_black());
    println!();
}

/// Shorten an opaque hex value for display: `0xabcd…ef12`.
pub fn abbreviate_hex(value: &str) -> String {
    if value.len() <= 18 {
        value.to_string()
    } else {
        format!("{}…{}", &value[..10], &value[value.len() - 6..])
    }
}

pub mod commands;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviate_keeps_short_values() {
        assert_eq!(abbreviate_hex("0x1234"), "0x1234");
    }

    #[test]
    fn abbreviate_shortens_long_values() {
        let long = format!("0x{}", "a".repeat(64));
        let short = abbreviate_hex(&long);
        assert!(short.starts_with("0xaaaaaaaa"));
        assert!(short.contains('…'));
        assert!(short.len() < long.len());
    }
}
