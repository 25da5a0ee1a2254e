//! Session metrics tracking.

/// Counters for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    commands_total: u64,
    command_failures_total: u64,
    unknown_commands_total: u64,
}

impl SessionMetrics {
    /// Create a new, zeroed tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a dispatched command and whether its handler succeeded.
    pub fn track_command(&mut self, command: &str, success: bool) {
        self.commands_total += 1;

        if success {
            tracing::debug!(command = %command, "Command handled");
        } else {
            self.command_failures_total += 1;
            tracing::warn!(command = %command, "Command failed");
        }
    }

    /// Track a line whose first word is not a known command.
    pub fn track_unknown_command(&mut self, command: &str) {
        self.unknown_commands_total += 1;
        tracing::debug!(command = %command, "Unknown command");
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    pub fn command_failures_total(&self) -> u64 {
        self.command_failures_total
    }

    pub fn unknown_commands_total(&self) -> u64 {
        self.unknown_commands_total
    }

    /// Share of handled commands that failed (0.0 to 1.0).
    pub fn failure_rate(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.command_failures_total as f64 / self.commands_total as f64
        }
    }

    /// A one-line summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Commands: {}, Failures: {} ({:.2}% failure rate), Unknown: {}",
            self.commands_total,
            self.command_failures_total,
            self.failure_rate() * 100.0,
            self.unknown_commands_total,
        )
    }
}
