//! Configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::AppError;
use crate::event::UI_AUTH_CHANNEL;
use crate::fields::phone::DEFAULT_DIAL_CODE;

#[derive(Clone, Debug)]
pub struct Config {
    pub logs_path: PathBuf,
    pub channel_name: String,
    pub country_dial_code: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            logs_path: PathBuf::from("logs"),
            channel_name: UI_AUTH_CHANNEL.to_string(),
            country_dial_code: DEFAULT_DIAL_CODE.to_string(),
        }
    }

    /// Overrides the defaults with values found in the environment.
    pub fn load(&mut self) -> Result<(), AppError> {
        if let Ok(path) = std::env::var("LOGS_PATH") {
            self.logs_path = PathBuf::from(path);
        }

        if let Ok(name) = std::env::var("UI_AUTH_CHANNEL") {
            if name.trim().is_empty() {
                return Err(AppError::InvalidConfig {
                    key: "UI_AUTH_CHANNEL".to_string(),
                    value: name,
                });
            }
            self.channel_name = name;
        }

        if let Ok(code) = std::env::var("COUNTRY_DIAL_CODE") {
            if !is_dial_code(&code) {
                return Err(AppError::InvalidConfig {
                    key: "COUNTRY_DIAL_CODE".to_string(),
                    value: code,
                });
            }
            self.country_dial_code = code;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn is_dial_code(code: &str) -> bool {
    code.strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
