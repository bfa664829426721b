//! Toast notification component
//!
//! A short message shown in the status bar that auto-dismisses after a
//! fixed duration.

use std::time::{Duration, Instant};

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message to display
    pub message: String,
    /// Rendered with the error color when set
    pub is_error: bool,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Error toasts stay up a little longer
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            duration: Duration::from_secs(4),
            ..Self::new(message)
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}
