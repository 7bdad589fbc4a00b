//! UI module for Piles
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::{AppComponent, AppState};
pub use layout::LayoutManager;
pub use renderer::run_app;
