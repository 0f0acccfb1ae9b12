use std::time::Duration;

use super::ConfigError;

const DEFAULT_MAX_SESSIONS: usize = 1024;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30 * 60;

/// Limits and checks applied by `SessionStore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// `create` fails once this many sessions exist
    pub max_sessions: usize,
    /// Sessions untouched for longer than this are dropped by `expire_idle`
    pub idle_timeout: Duration,
    /// Reject boards without exactly one king per side
    pub verify_kings: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            verify_kings: true,
        }
    }
}

impl SessionConfig {
    /// Zero refuses every `create` while leaving existing sessions alone.
    #[must_use]
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    #[must_use]
    pub fn with_verify_kings(mut self, verify_kings: bool) -> Self {
        self.verify_kings = verify_kings;
        self
    }

    /// Set one option from its textual name and value.
    ///
    /// Names are matched case-insensitively with spaces, dashes or
    /// underscores between words. `idle timeout` is given in seconds.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized: String = name
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        let invalid = || ConfigError::InvalidValue {
            name: name.trim().to_string(),
            value: value.to_string(),
        };
        let value = value.trim();

        match normalized.as_str() {
            "maxsessions" => {
                self.max_sessions = value.parse::<usize>().map_err(|_| invalid())?;
            }
            "idletimeout" => {
                let secs = value.parse::<u64>().map_err(|_| invalid())?;
                self.idle_timeout = Duration::from_secs(secs);
            }
            "verifykings" => {
                self.verify_kings = match value.to_ascii_lowercase().as_str() {
                    "true" | "1" | "on" => true,
                    "false" | "0" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.trim().to_string(),
                });
            }
        }
        Ok(())
    }
}
