//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! tracking focus, selection, and the status line around the list manager.

pub mod state;

pub use state::*;
