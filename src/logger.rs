use crate::constants::MAX_LOG_ENTRIES;
use chrono::Local;
use std::sync::{Arc, Mutex};

/// Shared session logger that can be used across the application
///
/// Entries feed the in-app log overlay; the oldest entries are dropped
/// once the buffer reaches its cap.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted = format!("[{}] {}", timestamp, message);

        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_LOG_ENTRIES {
                entries.remove(0);
            }
            entries.push(formatted);
        }
    }

    /// Get all entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut snapshot = entries.clone();
            snapshot.reverse();
            snapshot
        } else {
            Vec::new()
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_newest_first() {
        let logger = Logger::new();
        logger.log("first".to_string());
        logger.log("second".to_string());

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("second"));
        assert!(entries[1].ends_with("first"));
    }

    #[test]
    fn test_buffer_is_capped() {
        let logger = Logger::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            logger.log(format!("entry {}", i));
        }
        assert_eq!(logger.entries().len(), MAX_LOG_ENTRIES);
        // Oldest entries were dropped
        assert!(logger.entries().last().unwrap().ends_with("entry 10"));
    }

    #[test]
    fn test_clear() {
        let logger = Logger::new();
        logger.log("entry".to_string());
        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
