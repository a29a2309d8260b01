//! Profile command handlers.

use tabled::Tabled;

use eero_core::{Profile, Session};

use crate::cli::{GlobalOpts, OutputFormat, ProfilesArgs, ProfilesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: &'static str,
}

impl From<&Profile> for ProfileRow {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            status: p.status(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: ProfilesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command.unwrap_or(ProfilesCommand::List) {
        ProfilesCommand::List => {
            let profiles = session.profiles().await?;
            if profiles.is_empty() && matches!(global.output, OutputFormat::Table) {
                output::print_output("No profiles configured", global.quiet);
                return Ok(());
            }
            let out = output::render_list(
                &global.output,
                &profiles,
                |p| ProfileRow::from(p),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(
                    &format!("\nTotal: {} profiles", profiles.len()),
                    global.quiet,
                );
            }
            Ok(())
        }

        ProfilesCommand::Inspect { profile } => {
            let raw = session.inspect_profile(&profile).await?;
            output::print_output(&output::render_raw(&global.output, &raw)?, global.quiet);
            Ok(())
        }

        ProfilesCommand::Pause { profile } => {
            let p = session.set_profile_paused(&profile, true).await?;
            if !global.quiet {
                eprintln!("Profile {} ({}) has been paused", p.id, p.name);
            }
            Ok(())
        }

        ProfilesCommand::Unpause { profile } => {
            let p = session.set_profile_paused(&profile, false).await?;
            if !global.quiet {
                eprintln!("Profile {} ({}) has been unpaused", p.id, p.name);
            }
            Ok(())
        }

        ProfilesCommand::Add { profile, device } => {
            let (p, d) = session.add_device_to_profile(&profile, &device).await?;
            if !global.quiet {
                eprintln!(
                    "Device {} ({}) has been added to profile {}",
                    d.id,
                    d.display_name(),
                    p.name
                );
            }
            Ok(())
        }

        ProfilesCommand::Remove { profile, device } => {
            let (p, d) = session.remove_device_from_profile(&profile, &device).await?;
            if !global.quiet {
                eprintln!(
                    "Device {} ({}) has been removed from profile {}",
                    d.id,
                    d.display_name(),
                    p.name
                );
            }
            Ok(())
        }
    }
}
