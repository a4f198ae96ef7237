//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the cached tasks and view state
//! - Navigation types (Focus, ThemeMode)
//! - The display filter and the row edit buffer
//! - State error handling

mod error;
mod filter;
mod form;
mod navigation;

pub use error::StateError;
pub use filter::TaskFilter;
pub use form::EditState;
pub use navigation::{Focus, ThemeMode};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
