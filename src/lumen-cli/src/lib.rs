//! Command-line interface for the Lumen contrast checker.
//!
//! The CLI is a thin presentation layer over the `lumen-*` library crates:
//! it parses arguments, calls into the pure engine, and prints either
//! human-readable text or JSON.
//!
//! # Module Structure
//!
//! - `cli` - Command-line argument parsing and dispatch
//! - `*_cmd` - Individual command implementations

pub mod check_cmd;
pub mod cli;
pub mod ratio_cmd;
pub mod suggest_cmd;
