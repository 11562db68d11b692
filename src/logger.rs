use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes timestamped lines to stderr so stdout only carries results.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{}", self.line(value));
        }
    }

    fn line(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::Logger;

    #[test]
    fn line() {
        let logger = Logger::new(false);
        assert!(!logger.enabled());
        let line = logger.line("decode");
        assert!(line.starts_with("decode (00:"));
        assert!(line.ends_with(" elapsed)"));
    }
}
