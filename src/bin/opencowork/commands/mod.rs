//! Command implementations

pub mod about;
pub mod completions;
pub mod doctor;
pub mod symbols;
pub mod version;
