//! Guest network command handlers.

use eero_core::{GuestNetwork, Session};

use crate::cli::{GlobalOpts, GuestArgs, GuestCommand};
use crate::error::CliError;
use crate::output;

fn detail(g: &GuestNetwork) -> String {
    let mut lines = vec![
        "Guest Network Status".to_owned(),
        "--------------------".to_owned(),
        format!("Status:   {}", state(g)),
    ];
    if let Some(name) = g.name.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("Name:     {name}"));
    }
    // The password is only shown while guests can use it.
    if let Some(password) = g.password.as_deref().filter(|p| g.enabled && !p.is_empty()) {
        lines.push(format!("Password: {password}"));
    }
    lines.join("\n")
}

fn state(g: &GuestNetwork) -> &'static str {
    if g.enabled { "enabled" } else { "disabled" }
}

pub async fn handle(
    session: &Session,
    args: GuestArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command.unwrap_or(GuestCommand::Status) {
        GuestCommand::Status => {
            let guest = session.guest_network().await?;
            let out = output::render_single(&global.output, &guest, detail, |g| {
                state(g).to_owned()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GuestCommand::Enable => {
            session.set_guest_enabled(true).await?;
            if !global.quiet {
                eprintln!("Guest network has been enabled");
            }
            Ok(())
        }

        GuestCommand::Disable => {
            session.set_guest_enabled(false).await?;
            if !global.quiet {
                eprintln!("Guest network has been disabled");
            }
            Ok(())
        }

        GuestCommand::Password { password } => {
            session.set_guest_password(&password).await?;
            if !global.quiet {
                eprintln!("Guest network password has been updated");
            }
            Ok(())
        }
    }
}
