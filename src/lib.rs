//! Piles - a terminal dashboard for media content management
//!
//! This library provides a terminal-based interface for managing categorized
//! media content (movies, series, music, carousel items, and users) through
//! local in-memory CRUD operations, with a rich interactive UI built with
//! Ratatui. Content lives for the lifetime of the process; nothing is
//! persisted.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`content`] - Content categories and item model
//! * [`store`] - In-memory content collection and its mutation rules
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Content categories and the item model
pub mod content;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// In-app session log feeding the log overlay
pub mod logger;

/// File logging setup
pub mod logging;

/// In-memory content collection
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the model for convenient access
pub use content::{ContentItem, ContentKind};
pub use store::ContentStore;
