//! Whole-network reboot.

use eero_core::Session;

use crate::cli::GlobalOpts;
use crate::error::CliError;

use super::util;

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    // Fail on a missing login before asking anything.
    session.network_id().await?;

    let prompt = "Reboot the network? All devices will disconnect temporarily.";
    if !util::confirm(prompt, "reboot", global.yes)? {
        eprintln!("Reboot cancelled");
        return Ok(());
    }

    session.reboot_network().await?;
    if !global.quiet {
        eprintln!("Network reboot initiated. Devices will reconnect automatically.");
    }
    Ok(())
}
