//! Game settings received through `settings <key> <value>`.
//!
//! Values are stored as raw strings and parsed on access, so a setting the
//! bot does not understand is kept without complaint.

use std::collections::HashMap;
use std::time::Duration;

/// Errors raised when a required setting is absent or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("setting '{0}' has not been received")]
    Missing(&'static str),

    #[error("setting '{key}' has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

pub const YOUR_BOT: &str = "your_bot";
pub const OPPONENT_BOT: &str = "opponent_bot";
pub const STARTING_ARMIES: &str = "starting_armies";
pub const TIME_PER_MOVE: &str = "time_per_move";
pub const TIMEBANK: &str = "timebank";

/// Key/value settings with typed accessors for the ones the bot uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Creates an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a setting.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the raw value of a setting.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if no setting has been received.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn required(&self, key: &'static str) -> Result<&str, SettingsError> {
        self.get(key).ok_or(SettingsError::Missing(key))
    }

    fn number(&self, key: &'static str) -> Result<Option<u64>, SettingsError> {
        self.get(key)
            .map(|v| {
                v.parse().map_err(|_| SettingsError::Invalid {
                    key,
                    value: v.to_string(),
                })
            })
            .transpose()
    }

    /// Our own bot name.
    pub fn your_bot(&self) -> Result<&str, SettingsError> {
        self.required(YOUR_BOT)
    }

    /// The opponent's bot name.
    pub fn opponent_bot(&self) -> Result<&str, SettingsError> {
        self.required(OPPONENT_BOT)
    }

    /// Armies available to place this round.
    pub fn starting_armies(&self) -> Result<u32, SettingsError> {
        let value = self.required(STARTING_ARMIES)?;
        value.parse().map_err(|_| SettingsError::Invalid {
            key: STARTING_ARMIES,
            value: value.to_string(),
        })
    }

    /// Time added to the time bank each move.
    pub fn time_per_move(&self) -> Result<Option<Duration>, SettingsError> {
        Ok(self.number(TIME_PER_MOVE)?.map(Duration::from_millis))
    }

    /// Time left in the bank, used when no per-move budget is known.
    pub fn timebank(&self) -> Result<Option<Duration>, SettingsError> {
        Ok(self.number(TIMEBANK)?.map(Duration::from_millis))
    }
}
