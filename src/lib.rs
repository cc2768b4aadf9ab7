//! rtty - remote terminal session launcher
// (c) 2025 Ross Younger
//!
//! Opens an ssh session to a remote machine in a fresh terminal emulator
//! window, applying per-host window geometry and colour scheme preferences
//! from the user's ssh configuration file.

mod cli;
pub use cli::cli;
/// Configuration file handling
pub mod config;
/// OS abstraction layer
pub mod os;
mod session;
/// Terminal emulator selection and window templating
pub mod terminal;
/// Utilities
pub mod util;
