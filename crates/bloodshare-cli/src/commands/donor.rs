//! Donor administration commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use bloodshare_core::error::AppError;
use bloodshare_database::repositories::DonorRepository;
use bloodshare_entity::donor::Donor;
use bloodshare_messaging::phone::mask;
use bloodshare_service::{DonorListFilter, DonorService};

use crate::output::{self, OutputFormat};

/// Arguments for donor commands
#[derive(Debug, Args)]
pub struct DonorArgs {
    /// Donor subcommand
    #[command(subcommand)]
    pub command: DonorCommand,
}

/// Donor subcommands
#[derive(Debug, Subcommand)]
pub enum DonorCommand {
    /// List approved donors, or pending ones with --pending
    List {
        /// Show registrations awaiting approval
        #[arg(long)]
        pending: bool,
        /// Filter by city
        #[arg(long)]
        city: Option<String>,
    },
    /// Approve a pending donor
    Approve {
        /// Donor id
        id: Uuid,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Donor display row for table output
#[derive(Debug, Serialize, Tabled)]
struct DonorRow {
    id: String,
    name: String,
    blood_group: String,
    city: String,
    phone: String,
    emergency: bool,
    approved: bool,
    registered: String,
}

impl From<&Donor> for DonorRow {
    fn from(d: &Donor) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.full_name.clone(),
            blood_group: d.blood_group.to_string(),
            city: d.city.clone(),
            phone: mask(&d.phone_number),
            emergency: d.emergency_availability,
            approved: d.is_approved,
            registered: d.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute donor commands
pub async fn execute(
    args: &DonorArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = DonorService::new(Arc::new(DonorRepository::new(pool)));

    match &args.command {
        DonorCommand::List { pending, city } => {
            let filter = DonorListFilter {
                blood_group: None,
                city: city.clone(),
            };
            let donors = if *pending {
                service.list_pending(filter).await?
            } else {
                service.list_approved(filter).await?
            };

            let rows: Vec<DonorRow> = donors.iter().map(DonorRow::from).collect();
            output::print_list(&rows, format);
        }
        DonorCommand::Approve { id, yes } => {
            let donor = service.get(*id).await?;
            if donor.is_approved {
                output::print_success(&format!("{} is already approved", donor.full_name));
                return Ok(());
            }

            if !yes {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Approve {} ({}, {})?",
                        donor.full_name, donor.blood_group, donor.city
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let donor = service.approve(*id).await?;
            output::print_success(&format!("Donor '{}' approved", donor.full_name));
        }
    }

    Ok(())
}
