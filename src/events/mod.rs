//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: todo API interactions followed by a refresh
//! - Terminal events: User input and terminal interactions

pub mod network;
pub mod terminal;
