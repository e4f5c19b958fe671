//! folioterm - command core of a portfolio site's fake terminal.
//!
//! This library exposes the core modules for the binary and for integration
//! tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;
