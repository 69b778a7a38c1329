//! Token lifetimes.
//!
//! A lifetime is configured either as a whole number of seconds or as a
//! shorthand string like `"1h"` or `"7d"`. Unrecognized shorthand falls
//! back to a fixed default instead of failing, so token issuance stays
//! available under misconfiguration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fallback lifetime for unparsable shorthand: 7 days
pub const FALLBACK_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ttl {
    /// Absolute duration in seconds
    Seconds(u64),
    /// `<integer><unit>` where unit is one of s, m, h, d, w
    Shorthand(String),
}

impl Ttl {
    pub fn as_secs(&self) -> u64 {
        match self {
            Self::Seconds(secs) => *secs,
            Self::Shorthand(s) => parse_shorthand(s).unwrap_or(FALLBACK_TTL_SECS),
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.as_secs())
    }
}

impl From<u64> for Ttl {
    fn from(secs: u64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<&str> for Ttl {
    fn from(s: &str) -> Self {
        Self::Shorthand(s.to_string())
    }
}

fn parse_shorthand(s: &str) -> Option<u64> {
    let trimmed = s.trim();
    let unit = trimmed.chars().last()?;
    let value: u64 = trimmed.get(..trimmed.len() - unit.len_utf8())?.parse().ok()?;

    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        'w' => 7 * 24 * 60 * 60,
        _ => return None,
    };

    value.checked_mul(multiplier)
}
