//! Device command handlers.

use std::time::Duration;

use chrono::Local;
use tabled::Tabled;
use tokio_util::sync::CancellationToken;

use eero_core::{
    ChangeKind, Device, DeviceChange, DeviceFilter, FilterOutcome, MonitorEvent, Session,
};

use crate::cli::{
    DeviceFilterArgs, DevicesArgs, DevicesCommand, GlobalOpts, MonitorArgs, OutputFormat,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "TYPE")]
    medium: String,
    #[tabled(rename = "PROFILE")]
    profile: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.display_name().to_owned(),
            ip: d.ip.clone().unwrap_or_default(),
            mac: d.mac.as_ref().map(ToString::to_string).unwrap_or_default(),
            status: d.status().to_string(),
            medium: d.medium().to_owned(),
            profile: d.profile_label(),
        }
    }
}

impl From<DeviceFilterArgs> for DeviceFilter {
    fn from(args: DeviceFilterArgs) -> Self {
        Self {
            profile: args.profile.filter(|p| !p.trim().is_empty()),
            no_profile: args.no_profile,
            wired: args.wired,
            wireless: args.wireless,
            online: args.online,
            offline: args.offline,
            guest: args.guest,
            no_guest: args.no_guest,
            paused: args.paused,
            private: args.private,
        }
    }
}

/// `Total: N devices`, with the active predicates when filtered.
fn total_line(outcome: &FilterOutcome) -> String {
    match &outcome.description {
        Some(description) => {
            format!("Total: {} devices (filtered by {description})", outcome.count())
        }
        None => format!("Total: {} devices", outcome.count()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        None => list(session, args.filter, global).await,
        Some(DevicesCommand::List(filter)) => list(session, filter, global).await,
        Some(DevicesCommand::Monitor(monitor_args)) => {
            monitor(session, monitor_args, global).await
        }

        Some(DevicesCommand::Pause { device }) => {
            let d = session.set_device_paused(&device, true).await?;
            report(global, &d, "paused");
            Ok(())
        }
        Some(DevicesCommand::Unpause { device }) => {
            let d = session.set_device_paused(&device, false).await?;
            report(global, &d, "unpaused");
            Ok(())
        }
        Some(DevicesCommand::Block { device }) => {
            let d = session.set_device_blocked(&device, true).await?;
            report(global, &d, "blocked");
            Ok(())
        }
        Some(DevicesCommand::Unblock { device }) => {
            let d = session.set_device_blocked(&device, false).await?;
            report(global, &d, "unblocked");
            Ok(())
        }

        Some(DevicesCommand::Rename { device, name }) => {
            let nickname = util::join_words(&name);
            let d = session.rename_device(&device, &nickname).await?;
            if !global.quiet {
                eprintln!("Device {} has been renamed to '{nickname}'", d.id);
            }
            Ok(())
        }

        Some(DevicesCommand::Inspect { device }) => {
            let raw = session.inspect_device(&device).await?;
            output::print_output(&output::render_raw(&global.output, &raw)?, global.quiet);
            Ok(())
        }
    }
}

fn report(global: &GlobalOpts, device: &Device, action: &str) {
    if !global.quiet {
        eprintln!(
            "Device {} ({}) has been {action}",
            device.id,
            device.display_name()
        );
    }
}

async fn list(
    session: &Session,
    filter: DeviceFilterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let outcome = session.list_devices(&filter.into()).await?;
    let out = output::render_list(
        &global.output,
        &outcome.devices,
        |d| DeviceRow::from(d),
        |d| d.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    if matches!(global.output, OutputFormat::Table) {
        output::print_output(&format!("\n{}", total_line(&outcome)), global.quiet);
    }
    Ok(())
}

// ── Monitor ─────────────────────────────────────────────────────────

const NAME_WIDTH: usize = 25;
const IP_WIDTH: usize = 15;
const MAC_WIDTH: usize = 17;
const STATUS_WIDTH: usize = 7;
const TYPE_WIDTH: usize = 8;

async fn monitor(
    session: &Session,
    args: MonitorArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let interval = Duration::from_secs(args.interval);
    let filter = DeviceFilter::from(args.filter);
    let color = output::should_color(&global.color);
    let table = matches!(global.output, OutputFormat::Table);

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    if table && !global.quiet {
        eprintln!(
            "Monitoring devices every {} seconds. Press Ctrl+C to stop.\n",
            args.interval
        );
        output::print_output(&monitor_header(), false);
    }

    let format = &global.output;
    let quiet = global.quiet;
    session
        .monitor(&filter, interval, cancel, |event| {
            match monitor_line(format, &event, color) {
                Ok(line) => output::print_output(&line, quiet),
                Err(e) => tracing::warn!(error = %e, "could not render monitor event"),
            }
        })
        .await?;
    Ok(())
}

fn monitor_header() -> String {
    let header = format!(
        "{:<8}  {:<12}  {:<NAME_WIDTH$}  {:<IP_WIDTH$}  {:<MAC_WIDTH$}  {:<STATUS_WIDTH$}  {:<TYPE_WIDTH$}  {}",
        "TIME", "ID", "NAME", "IP", "MAC", "STATUS", "TYPE", "PROFILE"
    );
    let rule = format!(
        "{}  {}  {}  {}  {}  {}  {}  {}",
        "-".repeat(8),
        "-".repeat(12),
        "-".repeat(NAME_WIDTH),
        "-".repeat(IP_WIDTH),
        "-".repeat(MAC_WIDTH),
        "-".repeat(STATUS_WIDTH),
        "-".repeat(TYPE_WIDTH),
        "-".repeat(24),
    );
    format!("{header}\n{rule}")
}

/// One monitor event in the selected format. Structured formats emit one
/// document per event so the stream can be piped.
fn monitor_line(
    format: &OutputFormat,
    event: &MonitorEvent,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(match event {
            MonitorEvent::Change(change) => change_row(change, color),
            MonitorEvent::FetchFailed { at, message } => format!(
                "[{}] Error fetching devices: {message}",
                at.with_timezone(&Local).format("%H:%M:%S")
            ),
        }),
        OutputFormat::Json => output::render_json(event, false),
        OutputFormat::JsonCompact => output::render_json(event, true),
        OutputFormat::Yaml => Ok(format!("---\n{}", output::render_yaml(event)?)),
        OutputFormat::Plain => Ok(match event {
            MonitorEvent::Change(change) => format!(
                "{}\t{}\t{}",
                change.kind,
                change.device.id,
                change.device.status()
            ),
            MonitorEvent::FetchFailed { message, .. } => format!("error\t{message}"),
        }),
    }
}

/// Fixed-width row; changed fields are bold, everything is bold for a new
/// device.
fn change_row(change: &DeviceChange, color: bool) -> String {
    let d = &change.device;
    let is_new = change.kind == ChangeKind::New;

    let name = format!("{:<NAME_WIDTH$}", d.display_name());
    let ip = format!("{:<IP_WIDTH$}", d.ip.as_deref().unwrap_or_default());
    let mac = format!(
        "{:<MAC_WIDTH$}",
        d.mac.as_ref().map(ToString::to_string).unwrap_or_default()
    );
    let status = format!("{:<STATUS_WIDTH$}", d.status().to_string());
    let medium = format!("{:<TYPE_WIDTH$}", d.medium());

    format!(
        "{}  {:<12}  {}  {}  {}  {}  {}  {}",
        change.at.with_timezone(&Local).format("%H:%M:%S"),
        d.id.as_str(),
        output::bold_if(&name, is_new, color),
        output::bold_if(&ip, change.ip_changed(), color),
        mac,
        output::bold_if(&status, change.status_changed(), color),
        medium,
        d.profile_label(),
    )
}
