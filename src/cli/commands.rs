use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::{DeviceStatus, Employee};
use crate::roster::load_roster;
use crate::tui::run_interactive;
use crate::utils::environment::resolve_roster_path;
use crate::utils::paths::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "staffscope")]
#[command(version = "0.1.0")]
#[command(about = "Browse and live-filter a company staff roster", long_about = None)]
pub struct Cli {
    /// Path to the roster JSONL file (default: $STAFFSCOPE_ROSTER or
    /// ~/.staffscope/roster.jsonl)
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the roster
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let roster_path = resolve_roster_path(cli.roster.as_deref())?;
    let roster = load_roster(&roster_path)?;

    match &cli.command {
        Some(Commands::Stats) => {
            show_stats(&roster, &roster_path)?;
        }
        None => {
            run_interactive(roster)?;
        }
    }

    Ok(())
}

fn show_stats(roster: &[Employee], roster_path: &std::path::Path) -> Result<()> {
    let mut per_unit: BTreeMap<&str, usize> = BTreeMap::new();
    for employee in roster {
        *per_unit.entry(employee.unit_or_default()).or_insert(0) += 1;
    }

    let devices: Vec<_> = roster.iter().flat_map(|e| &e.devices).collect();
    let attached = devices.iter().filter(|d| d.status == DeviceStatus::Attached).count();
    let detached = devices.iter().filter(|d| d.status == DeviceStatus::Detached).count();
    let stock = devices.iter().filter(|d| d.status == DeviceStatus::Stock).count();

    println!("Staff Roster Statistics");
    println!("================================");
    println!("Total employees: {}", roster.len());
    for (unit, count) in &per_unit {
        println!("  {}: {}", unit, count);
    }
    println!();
    println!("Total devices: {}", devices.len());
    println!("  Attached: {}", attached);
    println!("  Detached: {}", detached);
    println!("  In stock: {}", stock);
    println!();
    println!("Roster file: {}", format_path_with_tilde(roster_path));

    Ok(())
}
