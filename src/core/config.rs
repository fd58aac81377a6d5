use super::constants::{SESSION_SECONDS, SESSION_SECONDS_MAX, SOUND_FILES, VIBRATE_MS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown query key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Runtime configuration for a game page.
///
/// Defaults come from [`super::constants`]. A page may override a few of them
/// through its URL query string, e.g. `?seconds=10&consent=0&log=debug`.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub session_seconds: u32,
    pub sound_files: Vec<String>,
    /// Ask before enabling audio on start. When off, audio starts lazily on the first tap.
    pub ask_audio_consent: bool,
    /// Zero disables vibration.
    pub vibrate_ms: u32,
    pub log_level: log::Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_seconds: SESSION_SECONDS,
            sound_files: SOUND_FILES.iter().map(|s| s.to_string()).collect(),
            ask_audio_consent: true,
            vibrate_ms: VIBRATE_MS,
            log_level: log::Level::Info,
        }
    }
}

impl GameConfig {
    /// Apply overrides from a URL query (with or without the leading `?`).
    ///
    /// Bad entries are skipped and returned so the caller can report them; the
    /// remaining entries still apply.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = self.apply_pair(key, value) {
                errors.push(e);
            }
        }
        errors
    }

    fn apply_pair(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "seconds" => {
                let secs: u32 = value.parse().map_err(|_| invalid())?;
                if !(1..=SESSION_SECONDS_MAX).contains(&secs) {
                    return Err(invalid());
                }
                self.session_seconds = secs;
            }
            "consent" => {
                self.ask_audio_consent = match value {
                    "1" | "true" | "on" => true,
                    "0" | "false" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            "vibrate" => {
                self.vibrate_ms = value.parse().map_err(|_| invalid())?;
            }
            "log" => {
                self.log_level = value.parse().map_err(|_| invalid())?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
