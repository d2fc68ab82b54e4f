//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! maps keyboard and mouse input onto application operations, and
//! renders the list view and its confirmation dialog.

pub mod input;
pub mod layout;
pub mod ui;

pub use input::*;
pub use layout::*;
pub use ui::*;
