//! Tally - Terminal List Counter Library
//!
//! A terminal-based list manager where every item carries a counter,
//! built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
