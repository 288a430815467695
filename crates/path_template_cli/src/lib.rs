//! Path template CLI library exports for testing.
//!
//! Command handlers return their output as strings; `main` only prints it.

pub mod commands;
pub mod errors;
