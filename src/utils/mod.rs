//! Utility modules shared across commands.

pub mod date;
pub mod log;
pub mod xml;
