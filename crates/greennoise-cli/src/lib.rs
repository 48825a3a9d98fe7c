//! Green noise CLI library.
//!
//! Command implementations live here so they can be tested without going
//! through the binary's argument parser.

pub mod commands;
