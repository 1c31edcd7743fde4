//! High-level operations.
//!
//! This module contains the implementation of OpenCowork commands.

pub mod doctor;
pub mod report;

pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use report::{format_banner, identity_report, IdentityReport};
