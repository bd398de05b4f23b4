//! Hornbook CLI library
//!
//! This library provides the core functionality for the hornbook CLI,
//! exposing modules for argument parsing, configuration, and command
//! implementations. The binary in `main.rs` wires them together.

pub mod cli;
pub mod commands;
pub mod config;
