//! LAF CLI — command-line interface for the Layered Authorship Framework.
//!
//! The command implementations live here (rather than in `main.rs`) so the
//! integration tests can exercise the same code paths as the binary.

pub mod commands;
