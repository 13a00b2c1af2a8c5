//! Messaging checks.

use clap::{Args, Subcommand};

use bloodshare_core::error::AppError;
use bloodshare_messaging::Transports;
use bloodshare_messaging::phone::{format_for_transport, mask};
use bloodshare_messaging::template::TEST_MESSAGE;

use crate::output;

/// Arguments for message commands
#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Message subcommand
    #[command(subcommand)]
    pub command: MessageCommand,
}

/// Message subcommands
#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// Send the test message to one phone over WhatsApp
    Test {
        /// Destination phone number
        phone: String,
    },
}

/// Execute message commands
pub async fn execute(args: &MessageArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let transports = Transports::from_config(&config.messaging)?;

    match &args.command {
        MessageCommand::Test { phone } => {
            let to = format_for_transport(phone, &config.messaging.whatsapp.default_country_code)?;
            let receipt = transports.whatsapp.send(&to, TEST_MESSAGE).await?;

            output::print_success(&format!("Test message sent to {}", mask(phone)));
            output::print_kv("Message id", &receipt.id);
        }
    }

    Ok(())
}
