//! Race finish/split time parsing and comparison.
//!
//! Times arrive as text in the form `H:MM:SS` or `HH:MM:SS`, optionally
//! followed by a fractional-second part of one to three digits
//! (`2:05:30.1`, `2:04:58.062`). Stored values keep their original text;
//! ranking and tie-breaking compare the normalized millisecond value, so
//! `2:05:30.10` and `2:05:30.1` are the same finish while `2:05:30.06`
//! beats `2:05:30.09`.
//!
//! Normalization is fixed-point (total milliseconds as `u64`), never
//! floating point, so equality is exact.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Accepted grammar: 1-2 hour digits, 2 minute digits, 2 second digits,
/// optional dot plus 1-3 fractional digits.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})(?:\.(\d{1,3}))?$").unwrap());

/// A parsed race time.
///
/// Ordering and equality consider only the normalized millisecond value;
/// the original text is retained for display and storage.
#[derive(Debug, Clone)]
pub struct RaceTime {
    millis: u64,
    raw: String,
}

impl RaceTime {
    /// Parse a race time from text.
    ///
    /// Minutes and seconds are strictly validated to `0..=59`. The legacy
    /// system was permissive here; this implementation deliberately is not
    /// (see DESIGN.md).
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let caps = TIME_RE.captures(text.trim()).ok_or_else(|| {
            CoreError::validation(format!(
                "Invalid time '{text}': expected H:MM:SS with an optional .f, .ff or .fff fraction"
            ))
        })?;

        // Group digit counts are bounded by the regex, so these cannot overflow.
        let hours: u64 = caps[1].parse().unwrap();
        let minutes: u64 = caps[2].parse().unwrap();
        let seconds: u64 = caps[3].parse().unwrap();

        if minutes > 59 {
            return Err(CoreError::validation(format!(
                "Invalid time '{text}': minutes must be 00-59"
            )));
        }
        if seconds > 59 {
            return Err(CoreError::validation(format!(
                "Invalid time '{text}': seconds must be 00-59"
            )));
        }

        // ".1" means 100ms, ".06" means 60ms: right-pad to three digits.
        let frac_millis: u64 = match caps.get(4) {
            Some(frac) => {
                let digits = frac.as_str();
                let padded = format!("{digits:0<3}");
                padded.parse().unwrap()
            }
            None => 0,
        };

        let millis = (hours * 3600 + minutes * 60 + seconds) * 1000 + frac_millis;

        Ok(RaceTime {
            millis,
            raw: text.trim().to_string(),
        })
    }

    /// Total normalized milliseconds.
    pub fn total_millis(&self) -> u64 {
        self.millis
    }

    /// Total seconds as a float, for display math only (never comparison).
    pub fn total_seconds(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// The original text the value was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for RaceTime {
    fn eq(&self, other: &Self) -> bool {
        self.millis == other.millis
    }
}

impl Eq for RaceTime {}

impl PartialOrd for RaceTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RaceTime {
    /// Ascending = faster finish first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.millis.cmp(&other.millis)
    }
}

impl std::fmt::Display for RaceTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
