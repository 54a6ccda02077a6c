//! Data models for the staff roster.
//!
//! - [`Employee`] - One staff member, as stored in the roster JSONL file
//! - [`Device`] - Hardware assigned to (or detached from) an employee
//! - [`DeviceStatus`] - Assignment state of a device
//!
//! All models derive serde traits; the roster file stores one employee
//! object per line.

pub mod employee;

pub use employee::{Device, DeviceStatus, Employee};
