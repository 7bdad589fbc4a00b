//! Core UI functionality for the Piles application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: the component abstraction, the action definitions every
//! component communicates with, and the terminal event source.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
