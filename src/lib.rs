//! staffscope - Browse and live-filter a company staff roster
//!
//! This library provides the pieces behind the `staffscope` terminal UI:
//!
//! - Loading employee records (with assigned devices) from a JSONL roster file
//! - A pure visibility filter: case-insensitive substring matching of a query
//!   against each employee's rendered row text
//! - An interactive TUI that re-evaluates every row on each keystroke
//!
//! # Example
//!
//! ```no_run
//! use staffscope::filter::compute_visibility;
//! use staffscope::load_roster;
//! use std::path::PathBuf;
//!
//! let roster = load_roster(&PathBuf::from("/home/alice/.staffscope/roster.jsonl"))?;
//! let visible = compute_visibility("eng", roster.iter().map(|e| e.display_line()));
//! println!("{} of {} rows match", visible.iter().filter(|v| **v).count(), roster.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod filter;
pub mod models;
pub mod roster;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use filter::compute_visibility;
pub use models::{Device, DeviceStatus, Employee};
pub use roster::load_roster;
pub use utils::paths::format_path_with_tilde;
