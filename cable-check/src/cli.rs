use std::path::PathBuf;

use cable_check::settings::ReportFormat;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cable-check")]
#[command(about = "Check device cabling against a documented topology")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare documented cabling with observed neighbors for one or more devices.
    Check(CheckArgs),
    /// List devices documented in a topology file.
    Devices(DevicesArgs),
}

#[derive(Parser, Debug)]
#[command(group(
    clap::ArgGroup::new("observed")
        .required(true)
        .args(["existing_file", "existing"])
))]
pub struct CheckArgs {
    /// Topology file documenting the desired cabling.
    pub desired: PathBuf,
    /// Device identifier to check. Repeat for several devices.
    #[arg(long = "device", required = true)]
    pub devices: Vec<String>,
    /// Topology file documenting the observed neighbors, keyed by device.
    #[arg(long)]
    pub existing_file: Option<PathBuf>,
    /// Observed neighbors as an inline JSON list of link records.
    #[arg(long)]
    pub existing: Option<String>,
    /// Output format. Defaults to the settings file value.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Append per-status counts.
    #[arg(long)]
    pub summary: bool,
    /// Print FAIL_00x status strings.
    #[arg(long)]
    pub legacy_status: bool,
    /// Report undocumented observed links after all documented links.
    #[arg(long)]
    pub trailing_undocumented: bool,
    /// Continue with the next device when one cannot be checked.
    #[arg(long)]
    pub keep_going: bool,
    /// Fail when any link is not OK.
    #[arg(long)]
    pub strict: bool,
    /// Optional settings TOML file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DevicesArgs {
    /// Topology file to list.
    pub file: PathBuf,
    /// Top-level key holding the device collection.
    #[arg(long)]
    pub root_key: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
