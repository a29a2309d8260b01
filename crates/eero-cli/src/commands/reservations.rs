//! DHCP reservation command handlers.

use tabled::Tabled;

use eero_core::{Reservation, Session};

use crate::cli::{GlobalOpts, OutputFormat, ReservationsArgs, ReservationsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ReservationRow {
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(r: &Reservation) -> Self {
        Self {
            ip: r.ip.clone(),
            mac: r.mac.to_string(),
            description: r.description.clone().unwrap_or_default(),
            id: r.id.to_string(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: ReservationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command.unwrap_or(ReservationsCommand::List) {
        ReservationsCommand::List => {
            let reservations = session.reservations().await?;
            if reservations.is_empty() && matches!(global.output, OutputFormat::Table) {
                output::print_output("No reservations found", global.quiet);
                return Ok(());
            }
            let out = output::render_list(
                &global.output,
                &reservations,
                |r| ReservationRow::from(r),
                |r| r.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ReservationsCommand::Add {
            mac,
            ip,
            description,
        } => {
            let description = util::join_words(&description);
            let (mac, ip) = session.add_reservation(&mac, &ip, &description).await?;
            if !global.quiet {
                eprintln!("Reservation created: {mac} -> {ip}");
            }
            Ok(())
        }

        ReservationsCommand::Remove { reservation } => {
            let removed = session.remove_reservation(&reservation).await?;
            if !global.quiet {
                eprintln!("Reservation deleted: {} -> {}", removed.mac, removed.ip);
            }
            Ok(())
        }

        ReservationsCommand::Inspect { reservation } => {
            let raw = session.inspect_reservation(&reservation).await?;
            output::print_output(&output::render_raw(&global.output, &raw)?, global.quiet);
            Ok(())
        }
    }
}
