//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Printer profiles (dot width, characters per line)

pub mod config;

pub use config::PrinterProfile;
