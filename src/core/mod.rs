//! Core exercise logic layer
//!
//! The two coursework exercises live here, independent of the CLI that
//! demonstrates them.

pub mod animals;
pub mod extremes;
