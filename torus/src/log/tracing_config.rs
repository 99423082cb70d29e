// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can display the logs to stdout
/// or stderr, and set the log level.
///
/// You can use [`crate::log::try_initialize_logging_global()`] to initialize the tracing
/// system with this configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub display_preference: DisplayPreference,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to the given [`DisplayPreference`] at [`LevelFilter::DEBUG`].
    #[must_use]
    pub fn new_display(display_preference: DisplayPreference) -> Self {
        Self {
            display_preference,
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level_filter(self, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..self
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_display_defaults_to_debug() {
        let config = TracingConfig::new_display(DisplayPreference::Stderr);
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(config.display_preference, DisplayPreference::Stderr);
    }

    #[test]
    fn test_with_level_filter() {
        let config = TracingConfig::new_display(DisplayPreference::Stdout)
            .with_level_filter(LevelFilter::TRACE);
        assert_eq!(config.get_level_filter(), LevelFilter::TRACE);
        assert_eq!(config.display_preference, DisplayPreference::Stdout);
    }
}
