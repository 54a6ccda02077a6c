//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use staffscope::{Device, DeviceStatus, Employee};
use tempfile::TempDir;

/// Builder for creating roster files in a temp directory
pub struct RosterBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Append an employee record as a JSONL line
    pub fn with_employee(mut self, employee: &EmployeeBuilder) -> Self {
        self.lines.push(employee.to_json());
        self
    }

    /// Append a raw line (for malformed-input tests)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write roster.jsonl and return its path; the temp dir handle keeps the
    /// file alive
    pub fn write(&self) -> PathBuf {
        let path = self.temp_dir.path().join("roster.jsonl");
        let mut file = fs::File::create(&path).expect("Failed to create roster.jsonl");
        file.write_all(self.lines.join("\n").as_bytes()).expect("Failed to write roster.jsonl");
        path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for employee records
pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            employee: Employee {
                name: name.to_string(),
                email: None,
                unit: None,
                devices: Vec::new(),
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.employee.email = Some(email.to_string());
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.employee.unit = Some(unit.to_string());
        self
    }

    pub fn device(mut self, model: &str, serial: Option<&str>, status: DeviceStatus) -> Self {
        self.employee.devices.push(Device {
            model: model.to_string(),
            serial: serial.map(String::from),
            status,
        });
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.employee).expect("Failed to serialize employee")
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}
