use serde::{Deserialize, Serialize};

use crate::utils::terminal::strip_ansi_codes;

/// Unit shown for employees without an assigned organizational unit
pub const DEFAULT_UNIT: &str = "General";

/// Assignment state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Attached,
    Detached,
    Stock,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Attached => "attached",
            DeviceStatus::Detached => "detached",
            DeviceStatus::Stock => "stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub model: String,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default = "default_device_status")]
    pub status: DeviceStatus,
}

fn default_device_status() -> DeviceStatus {
    DeviceStatus::Attached
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Employee {
    /// Organizational unit, falling back to [`DEFAULT_UNIT`] when unset or blank
    pub fn unit_or_default(&self) -> &str {
        match self.unit.as_deref() {
            Some(unit) if !unit.trim().is_empty() => unit,
            _ => DEFAULT_UNIT,
        }
    }

    /// The row text shown in the results list, and the text the live filter
    /// matches against. Roster files are user-controlled, so control
    /// sequences are stripped before the text reaches the terminal.
    pub fn display_line(&self) -> String {
        let mut line = format!("{} | {}", self.name, self.unit_or_default());
        if let Some(email) = &self.email {
            line.push_str(" | ");
            line.push_str(email);
        }
        strip_ansi_codes(&line)
    }

    /// One-line contact summary used for clipboard copy
    pub fn contact_line(&self) -> String {
        match &self.email {
            Some(email) => strip_ansi_codes(&format!("{} <{}>", self.name, email)),
            None => strip_ansi_codes(&self.name),
        }
    }
}
