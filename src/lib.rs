//! A terminal client for a REST todo list.
//!
//! The UI thread renders an explicit [`state::State`] and turns key presses
//! into local transitions or network events. The network thread performs
//! each remote call through [`todos::Todos`] and then re-fetches the whole
//! collection.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod todos;
pub mod ui;
