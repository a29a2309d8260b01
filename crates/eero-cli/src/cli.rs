//! Clap derive structures for the `eero-cli` binary.
//!
//! Only depends on clap and clap_complete so `build.rs` can include it
//! directly for man page generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// eero-cli -- manage an eero mesh network from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "eero-cli",
    version,
    about = "Manage eero mesh networks from the command line",
    long_about = "Log in with an email or phone number, then list and control devices,\n\
        profiles, eero nodes, the guest network and DHCP reservations.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "EERO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Config file (default: platform config dir)
    #[arg(long, env = "EERO_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API root URL (overrides the config file and EERO_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides the config file and EERO_TIMEOUT)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with an email or phone number and a verification code
    Login(LoginArgs),

    /// Forget the saved session token
    Logout,

    /// Show authentication status, account and networks
    Status,

    /// List, monitor and control connected devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Manage parental-control profiles
    #[command(alias = "p")]
    Profiles(ProfilesArgs),

    /// List and reboot eero nodes
    #[command(alias = "e")]
    Eeros(EerosArgs),

    /// Manage the guest network
    #[command(alias = "g")]
    Guest(GuestArgs),

    /// Manage DHCP reservations
    #[command(alias = "res", alias = "r")]
    Reservations(ReservationsArgs),

    /// Reboot the whole network
    Reboot,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Login ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email or phone number (prompted when omitted)
    pub identity: Option<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: Option<DevicesCommand>,

    /// Filters for the default `list` action
    #[command(flatten)]
    pub filter: DeviceFilterArgs,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices (default)
    #[command(alias = "ls")]
    List(DeviceFilterArgs),

    /// Watch devices and print only what changes
    #[command(alias = "watch")]
    Monitor(MonitorArgs),

    /// Pause internet access for a device
    Pause {
        /// Device ID, ID prefix, MAC address or name
        device: String,
    },

    /// Resume internet access for a device
    Unpause {
        /// Device ID, ID prefix, MAC address or name
        device: String,
    },

    /// Block a device from the network
    Block {
        /// Device ID, ID prefix, MAC address or name
        device: String,
    },

    /// Unblock a device
    Unblock {
        /// Device ID, ID prefix, MAC address or name
        device: String,
    },

    /// Set a device's nickname
    Rename {
        /// Device ID, ID prefix, MAC address or name
        device: String,

        /// New nickname (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Print the raw device record as JSON
    Inspect {
        /// Device ID, ID prefix, MAC address or name
        device: String,
    },
}

/// Device predicates. Every flag given must hold.
#[derive(Debug, Clone, Default, Args)]
pub struct DeviceFilterArgs {
    /// Only devices in this profile (name or ID)
    #[arg(long, value_name = "NAME|ID")]
    pub profile: Option<String>,

    /// Only devices without a profile
    #[arg(long = "noprofile")]
    pub no_profile: bool,

    /// Only wired devices
    #[arg(long)]
    pub wired: bool,

    /// Only wireless devices
    #[arg(long)]
    pub wireless: bool,

    /// Only connected devices
    #[arg(long)]
    pub online: bool,

    /// Only disconnected devices
    #[arg(long)]
    pub offline: bool,

    /// Only devices on the guest network
    #[arg(long)]
    pub guest: bool,

    /// Exclude devices on the guest network
    #[arg(long = "noguest")]
    pub no_guest: bool,

    /// Only paused devices
    #[arg(long)]
    pub paused: bool,

    /// Only devices using a private (randomized) MAC
    #[arg(long)]
    pub private: bool,
}

#[derive(Debug, Args)]
pub struct MonitorArgs {
    #[command(flatten)]
    pub filter: DeviceFilterArgs,

    /// Seconds between polls
    #[arg(long, short = 'i', default_value = "10", value_name = "SECS")]
    pub interval: u64,
}

// ── Profiles ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: Option<ProfilesCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    /// List profiles (default)
    #[command(alias = "ls")]
    List,

    /// Print the raw profile record as JSON
    Inspect {
        /// Profile ID, ID prefix or name
        profile: String,
    },

    /// Pause internet access for every device in a profile
    Pause {
        /// Profile ID, ID prefix or name
        profile: String,
    },

    /// Resume internet access for a profile
    Unpause {
        /// Profile ID, ID prefix or name
        profile: String,
    },

    /// Add a device to a profile
    Add {
        /// Profile ID, ID prefix or name
        profile: String,

        /// Device ID, ID prefix, MAC address or name
        device: String,
    },

    /// Remove a device from a profile
    Remove {
        /// Profile ID, ID prefix or name
        profile: String,

        /// Device ID, ID prefix, MAC address or name
        device: String,
    },
}

// ── Eeros ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EerosArgs {
    #[command(subcommand)]
    pub command: Option<EerosCommand>,
}

#[derive(Debug, Subcommand)]
pub enum EerosCommand {
    /// List eero nodes (default)
    #[command(alias = "ls")]
    List,

    /// Print the raw eero record as JSON
    Inspect {
        /// Eero ID, ID prefix, serial or location
        eero: String,
    },

    /// Reboot one eero node
    Reboot {
        /// Eero ID, ID prefix, serial or location
        eero: String,
    },
}

// ── Guest network ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GuestArgs {
    #[command(subcommand)]
    pub command: Option<GuestCommand>,
}

#[derive(Debug, Subcommand)]
pub enum GuestCommand {
    /// Show guest network status (default)
    Status,

    /// Turn the guest network on
    Enable,

    /// Turn the guest network off
    Disable,

    /// Change the guest network password
    Password {
        /// New password
        password: String,
    },
}

// ── Reservations ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub command: Option<ReservationsCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ReservationsCommand {
    /// List DHCP reservations (default)
    #[command(alias = "ls")]
    List,

    /// Reserve an IP address for a MAC address
    Add {
        /// MAC address (colon or dash separated)
        mac: String,

        /// IPv4 or IPv6 address
        ip: String,

        /// Optional description (words are joined with spaces)
        description: Vec<String>,
    },

    /// Delete a reservation
    #[command(alias = "rm")]
    Remove {
        /// Reservation ID, ID prefix, MAC address or IP
        reservation: String,
    },

    /// Print the raw reservation record as JSON
    Inspect {
        /// Reservation ID, ID prefix, MAC address or IP
        reservation: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
