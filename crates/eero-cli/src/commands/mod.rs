//! Command dispatch: bridges CLI args -> session calls -> output formatting.

pub mod auth;
pub mod devices;
pub mod eeros;
pub mod guest;
pub mod profiles;
pub mod reboot;
pub mod reservations;
pub mod util;

use std::path::Path;

use eero_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &Session,
    config_path: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(session, args, global).await,
        Command::Logout => auth::logout(session, global),
        Command::Status => auth::status(session, config_path, global).await,
        Command::Devices(args) => devices::handle(session, args, global).await,
        Command::Profiles(args) => profiles::handle(session, args, global).await,
        Command::Eeros(args) => eeros::handle(session, args, global).await,
        Command::Guest(args) => guest::handle(session, args, global).await,
        Command::Reservations(args) => reservations::handle(session, args, global).await,
        Command::Reboot => reboot::handle(session, global).await,
        // Completions are handled before a session exists
        Command::Completions(_) => Err(CliError::Internal(
            "completions must be handled before dispatch".into(),
        )),
    }
}
