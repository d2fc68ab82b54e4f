//! Infrastructure layer providing external service integrations.
//!
//! This module contains configuration loading, log file setup and
//! system clipboard access.

pub mod clipboard;
pub mod config;
pub mod logging;

pub use clipboard::*;
pub use config::*;
pub use logging::*;
