//! Praktikum - a Rust-based coursework exercise runner
//!
//! Two independent classroom exercises behind one small CLI: a negative-sum
//! scan between a sequence's extremes, and an animal hierarchy demonstrating
//! method overriding with a subtype-specific capability.

pub mod cli;
pub mod commands;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    animals::{Animal, Dog, GenericAnimal},
    extremes::{ScanReport, scan, sum_between_extremes},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
