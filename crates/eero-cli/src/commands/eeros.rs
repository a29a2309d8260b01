//! Eero node command handlers.

use tabled::Tabled;

use eero_core::{MeshNode, Session};

use crate::cli::{EerosArgs, EerosCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EeroRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "GATEWAY")]
    gateway: &'static str,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MODEL")]
    model: String,
    #[tabled(rename = "CLIENTS")]
    clients: u32,
    #[tabled(rename = "SIGNAL")]
    signal: String,
    #[tabled(rename = "TYPE")]
    medium: &'static str,
}

impl From<&MeshNode> for EeroRow {
    fn from(e: &MeshNode) -> Self {
        Self {
            id: e.id.to_string(),
            location: e.location.clone().unwrap_or_default(),
            status: e.state.as_deref().unwrap_or_default().to_lowercase(),
            gateway: if e.gateway { "yes" } else { "no" },
            ip: util::or_dash(e.ip.as_deref()),
            model: util::or_dash(e.model.as_deref()),
            clients: e.connected_clients,
            signal: e.signal(),
            medium: e.medium(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: EerosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command.unwrap_or(EerosCommand::List) {
        EerosCommand::List => {
            let eeros = session.eeros().await?;
            if eeros.is_empty() && matches!(global.output, OutputFormat::Table) {
                output::print_output("No eero nodes found", global.quiet);
                return Ok(());
            }
            let out = output::render_list(
                &global.output,
                &eeros,
                |e| EeroRow::from(e),
                |e| e.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(
                    &format!("\nTotal: {} eero nodes", eeros.len()),
                    global.quiet,
                );
            }
            Ok(())
        }

        EerosCommand::Inspect { eero } => {
            let raw = session.inspect_eero(&eero).await?;
            output::print_output(&output::render_raw(&global.output, &raw)?, global.quiet);
            Ok(())
        }

        EerosCommand::Reboot { eero } => {
            let prompt = format!("Reboot eero '{eero}'? Its clients will disconnect briefly.");
            if !util::confirm(&prompt, "eeros reboot", global.yes)? {
                eprintln!("Reboot cancelled");
                return Ok(());
            }
            let node = session.reboot_eero(&eero).await?;
            if !global.quiet {
                eprintln!(
                    "Rebooting eero {} ({})...",
                    node.id,
                    node.location.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use eero_core::ResourceId;

    use super::*;

    #[test]
    fn row_matches_listing_columns() {
        let node = MeshNode {
            id: ResourceId::from("3456"),
            url: "/2.2/eeros/3456".into(),
            serial: Some("GGC1UC0000000".into()),
            location: Some("Attic".into()),
            gateway: true,
            ip: Some("192.168.4.1".into()),
            model: None,
            os_version: None,
            wired: true,
            mesh_quality_bars: 4,
            connected_clients: 12,
            heartbeat_ok: true,
            state: Some("ONLINE".into()),
        };
        let row = EeroRow::from(&node);
        assert_eq!(row.status, "online");
        assert_eq!(row.gateway, "yes");
        assert_eq!(row.model, "-");
        assert_eq!(row.signal, "4/5");
        assert_eq!(row.medium, "wired");
    }
}
