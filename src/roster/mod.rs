//! Roster file loading.
//!
//! The roster is a JSONL file, one [`Employee`] object per line. Loading is
//! forgiving: empty lines are ignored and malformed lines are logged and
//! skipped, so a hand-edited roster with a stray typo still opens. Loading
//! bails out when the file looks corrupted (too many consecutive failures
//! or a majority of lines unparseable).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Employee;
use crate::utils::paths::validate_file_size;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Load employees from a JSONL roster file.
///
/// A missing roster file is not an error: the filter UI is simply inert
/// without data, so an empty roster is returned instead.
pub fn load_roster(path: &Path) -> Result<Vec<Employee>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    // Open first, then validate size on the handle to avoid TOCTOU races
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let mut employees = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from roster file")?;

        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<Employee>(&line) {
            Ok(employee) => {
                employees.push(employee);
                consecutive_errors = 0;
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse line {} in roster file: {}", line_num + 1, e);
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in roster file - file may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in roster file: {} of {} lines failed ({:.1}%)",
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        eprintln!("Loaded roster: {} employees ({} lines skipped)", employees.len(), skipped_count);
    }

    Ok(employees)
}
