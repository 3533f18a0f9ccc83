//! Runtime configuration read from the environment.

use crate::sheet_actor::{SheetContext, DEFAULT_MAX_ROOMS};
use thiserror::Error;

pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Sizing knobs for an [`EstimatorSystem`](super::EstimatorSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Requests that may queue in the sheet actor's mailbox.
    pub mailbox_capacity: usize,
    /// Largest room list a sheet may hold.
    pub max_rooms: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            max_rooms: DEFAULT_MAX_ROOMS,
        }
    }
}

impl SystemConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MORTAR_MAILBOX_CAPACITY`: default 32
    /// - `MORTAR_MAX_ROOMS`: default 500
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            mailbox_capacity: parse_positive(
                "MORTAR_MAILBOX_CAPACITY",
                lookup("MORTAR_MAILBOX_CAPACITY"),
                defaults.mailbox_capacity,
            )?,
            max_rooms: parse_positive("MORTAR_MAX_ROOMS", lookup("MORTAR_MAX_ROOMS"), defaults.max_rooms)?,
        })
    }

    pub fn sheet_context(&self) -> SheetContext {
        SheetContext {
            max_rooms: self.max_rooms,
        }
    }
}

fn parse_positive(var: &'static str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}
