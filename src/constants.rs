//! Constants used throughout the application
//!
//! This module centralizes UI text, magic strings, and layout values to
//! improve maintainability and consistency.

// Application identity
pub const APP_TITLE: &str = "Piles - Media Management";
pub const APP_TAGLINE: &str = "Manage your movies, series, music and more";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const STATUS_HINTS: &str = "a: add • e: edit • d: delete • ←/→: tabs • ?: help • q: quit";
pub const FORM_HINT_CREATE: &str = "Enter: add • Tab: next field • Esc: back to list";
pub const FORM_HINT_EDIT: &str = "Enter: save changes • Tab: next field • Esc: cancel edit";
pub const DIALOG_TITLE_LOGS: &str = "Session Log - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Header height in rows (title + tagline)
pub const HEADER_HEIGHT: u16 = 2;
/// Tab bar height in rows, including its border
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Form panel height in rows (two bordered inputs + hint line)
pub const FORM_HEIGHT: u16 = 9;
/// Status bar height in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Upper bound on retained session log entries
pub const MAX_LOG_ENTRIES: usize = 500;
