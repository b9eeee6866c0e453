//! Command-line front end: subcommand parsing and the one-shot commands.
//!
//! Output goes to any [`Write`] so the reports can be checked in tests.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::{NetworkTotals, Station};
use crate::stations::{
    FetchError, ProbeReport, SnapshotError, SnapshotStore, StationClient, StationSource,
    load_stations,
};

/// Stations printed after a snapshot.
const SAMPLE_SIZE: usize = 3;

pub const USAGE: &str = "\
Usage: velib-server [COMMAND]

Commands:
  serve     Start the web server (default)
  snapshot  Fetch stations and write a velib_data_<timestamp>.json file
  check     Check that the station API is reachable";

/// A subcommand given as the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Snapshot,
    Check,
}

impl Command {
    /// Parse the first positional argument; none means `serve`.
    pub fn from_args<I>(mut args: I) -> Result<Self, CliError>
    where
        I: Iterator<Item = String>,
    {
        match args.next() {
            None => Ok(Command::Serve),
            Some(arg) => arg.parse(),
        }
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serve" => Ok(Command::Serve),
            "snapshot" => Ok(Command::Snapshot),
            "check" => Ok(Command::Check),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

/// Errors from the one-shot commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("error fetching data: {0}")]
    Fetch(#[from] FetchError),

    #[error("no station data found in the response")]
    NoStations,

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Fetch stations and write them to a new snapshot file.
///
/// Previous snapshots in the store are removed first. Nothing is written
/// when the fetch fails or yields no stations.
pub async fn run_snapshot(
    source: &dyn StationSource,
    limit: usize,
    store: &SnapshotStore,
    out: &mut impl Write,
) -> Result<PathBuf, CliError> {
    writeln!(out, "Cleaning up old files in {}...", store.dir().display())?;
    for path in store.cleanup()? {
        writeln!(out, "Deleted old file: {}", path.display())?;
    }

    writeln!(out, "Fetching Velib data...")?;
    let stations = load_stations(source, limit).await?;
    if stations.is_empty() {
        return Err(CliError::NoStations);
    }

    write_summary(out, &NetworkTotals::from_stations(&stations))?;

    let path = store.save(&stations)?;
    writeln!(out, "Data saved to {}", path.display())?;

    writeln!(out)?;
    writeln!(out, "Sample stations:")?;
    for station in stations.iter().take(SAMPLE_SIZE) {
        write_station(out, station)?;
    }

    Ok(path)
}

/// Probe the provider and report what it said.
pub async fn run_check(
    client: &StationClient,
    out: &mut impl Write,
) -> Result<ProbeReport, CliError> {
    writeln!(out, "Checking {}", client.base_url())?;
    let report = client.probe().await?;

    writeln!(out, "Status: {}", report.status)?;
    match report.total_count {
        Some(total) => writeln!(out, "Total stations: {total}")?,
        None => writeln!(out, "Total stations: unknown")?,
    }

    Ok(report)
}

fn write_summary(out: &mut impl Write, totals: &NetworkTotals) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Found {} stations", totals.stations)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "   Total e-bikes: {}", totals.ebikes)?;
    writeln!(out, "   Total mechanical bikes: {}", totals.mechanical)?;
    writeln!(out, "   Total bikes: {}", totals.total())
}

fn write_station(out: &mut impl Write, station: &Station) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Station: {}", station.name)?;
    writeln!(out, "   Code: {}", station.code)?;
    writeln!(out, "   Capacity: {}", station.capacity)?;
    writeln!(out, "   E-bikes: {}", station.ebike_count)?;
    writeln!(out, "   Mechanical bikes: {}", station.mechanical_count)?;
    writeln!(out, "   Installed: {}", yes_no(station.is_installed))?;
    writeln!(out, "   Renting: {}", yes_no(station.is_renting))?;
    writeln!(out, "   Returning: {}", yes_no(station.is_returning))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
