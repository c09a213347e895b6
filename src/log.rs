//! The bounded, player-facing event log.

use std::collections::VecDeque;

/// Default number of events kept.
pub const DEFAULT_LOG_LIMIT: usize = 20;

/// A bounded log of human-readable events. The oldest events fall off first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    events: VecDeque<String>,
    limit: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LIMIT)
    }
}

impl EventLog {
    /// Creates a log keeping at most `limit` events; 0 selects the default.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = if limit == 0 { DEFAULT_LOG_LIMIT } else { limit };
        Self {
            events: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Appends an event, evicting the oldest ones past the limit.
    pub fn push(&mut self, event: impl Into<String>) {
        self.events.push_back(event.into());
        while self.events.len() > self.limit {
            self.events.pop_front();
        }
    }

    /// Returns the events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    /// Returns the maximum number of events kept.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of events held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Renders one event per line, every line after the first indented by a space.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for (index, event) in self.events.iter().enumerate() {
            if index > 0 {
                rendered.push(' ');
            }
            rendered.push_str(event);
            rendered.push('\n');
        }
        rendered
    }
}
