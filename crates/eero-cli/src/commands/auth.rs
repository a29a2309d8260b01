//! Login, logout and status.

use std::path::Path;

use serde::Serialize;

use eero_core::{Account, AuthStatus, Session};

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn login(
    session: &Session,
    args: LoginArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let identity = match args.identity {
        Some(identity) => identity,
        None => util::prompt("Email or phone number")?,
    };
    let token = session.login(&identity).await?;
    if !global.quiet {
        eprintln!("A verification code has been sent to your email or phone.");
    }

    let code = util::prompt("Verification code")?;
    let network = session.verify(token, &code).await?;
    if !global.quiet {
        match network {
            Some(network) => eprintln!("Logged in to network: {}", network.name),
            None => eprintln!("Logged in, but the network list could not be fetched."),
        }
        eprintln!("Token saved.");
    }
    Ok(())
}

pub fn logout(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.logout()?;
    if !global.quiet {
        eprintln!("Logged out. Token cleared.");
    }
    Ok(())
}

/// Structured form of `status` for json/yaml output.
#[derive(Serialize)]
struct StatusReport<'a> {
    status: &'static str,
    config: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<&'a Account>,
}

pub async fn status(
    session: &Session,
    config_path: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let status = session.status().await;
    let (label, account) = match &status {
        AuthStatus::NotLoggedIn => ("not_logged_in", None),
        AuthStatus::TokenInvalid => ("token_invalid", None),
        AuthStatus::Authenticated { account } => ("authenticated", account.as_ref()),
    };
    let report = StatusReport {
        status: label,
        config: config_path.display().to_string(),
        account,
    };
    let out = output::render_single(
        &global.output,
        &report,
        |r| detail(&status, r),
        |r| r.status.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(status: &AuthStatus, report: &StatusReport<'_>) -> String {
    let headline = match status {
        AuthStatus::NotLoggedIn => "Not logged in",
        AuthStatus::TokenInvalid => "Token is invalid or expired",
        AuthStatus::Authenticated { account: None } => {
            "Authenticated (couldn't fetch account details)"
        }
        AuthStatus::Authenticated { account: Some(_) } => "Authenticated",
    };
    let mut lines = vec![
        format!("Status:   {headline}"),
        format!("Config:   {}", report.config),
    ];
    if let Some(account) = report.account {
        let fields = [
            ("Email:   ", &account.email),
            ("Phone:   ", &account.phone),
            ("Name:    ", &account.name),
        ];
        for (label, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                lines.push(format!("{label} {value}"));
            }
        }
        if !account.networks.is_empty() {
            lines.push("Networks:".into());
            for network in &account.networks {
                let premium = if network.premium { " (Premium)" } else { "" };
                lines.push(format!("  - {} [{}]{premium}", network.name, network.id));
            }
        }
    }
    lines.join("\n")
}
