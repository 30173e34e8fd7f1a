//! Movie running time, written `HH:MM:SS`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A running time in whole seconds.
///
/// Text form is `HH:MM:SS`: minutes and seconds are exactly two digits and
/// below 60, hours are at least two digits and may grow past 99. Every value
/// renders to text that parses back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Runtime {
    seconds: u32,
}

/// Text that is not a valid `HH:MM:SS` duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid runtime '{text}': {reason}")]
pub struct RuntimeParseError {
    pub text: String,
    pub reason: &'static str,
}

impl Runtime {
    pub fn from_secs(seconds: u32) -> Self {
        Runtime { seconds }
    }

    /// Saturates at `u32::MAX` seconds.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
        Runtime {
            seconds: u32::try_from(total).unwrap_or(u32::MAX),
        }
    }

    pub fn as_secs(self) -> u32 {
        self.seconds
    }

    pub fn as_duration(self) -> time::Duration {
        time::Duration::seconds(i64::from(self.seconds))
    }

    pub fn is_positive(self) -> bool {
        self.seconds > 0
    }

    pub fn parse(text: &str) -> Result<Runtime, RuntimeParseError> {
        let fail = |reason| RuntimeParseError {
            text: text.to_owned(),
            reason,
        };

        let parts: Vec<&str> = text.trim().split(':').collect();
        let [h, m, s] = parts.as_slice() else {
            return Err(fail("expected HH:MM:SS"));
        };
        if h.len() < 2 || m.len() != 2 || s.len() != 2 {
            return Err(fail("expected two-digit minutes and seconds, at least two-digit hours"));
        }
        let mut values = [0u64; 3];
        for (slot, part) in values.iter_mut().zip([h, m, s]) {
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(fail("components must be digits"));
            }
            *slot = part.parse().map_err(|_| fail("too long"))?;
        }
        let [hours, minutes, seconds] = values;
        if minutes >= 60 || seconds >= 60 {
            return Err(fail("minutes and seconds must be below 60"));
        }
        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .and_then(|total| u32::try_from(total).ok())
            .map(Runtime::from_secs)
            .ok_or_else(|| fail("too long"))
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for Runtime {
    type Err = RuntimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Runtime::parse(s)
    }
}

impl TryFrom<String> for Runtime {
    type Error = RuntimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Runtime::parse(&value)
    }
}

impl From<Runtime> for String {
    fn from(runtime: Runtime) -> String {
        runtime.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_digit_components() {
        let r = Runtime::parse("02:32:10").unwrap();
        assert_eq!(r.as_secs(), 2 * 3600 + 32 * 60 + 10);
        assert_eq!(r.to_string(), "02:32:10");
        assert_eq!(r.as_duration(), time::Duration::seconds(9130));
    }

    #[test]
    fn zero_parses_but_is_not_positive() {
        let r = Runtime::parse("00:00:00").unwrap();
        assert!(!r.is_positive());
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "1:30:00", "01:30", "01:60:00", "01:00:60", "aa:bb:cc", "01:30:00:00", "-1:30:00", "01:5:00", "+01:30:00"] {
            assert!(Runtime::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn long_runtime_renders_hours_past_a_day() {
        let r = Runtime::from_hms(25, 0, 1);
        assert_eq!(r.to_string(), "25:00:01");
        assert_eq!(Runtime::parse("25:00:01"), Ok(r));
    }

    #[test]
    fn hours_past_ninety_nine_round_trip() {
        let r = Runtime::from_hms(100, 0, 0);
        assert_eq!(r.to_string(), "100:00:00");
        assert_eq!(Runtime::parse("100:00:00"), Ok(r));

        let longest = Runtime::from_secs(u32::MAX);
        assert_eq!(Runtime::parse(&longest.to_string()), Ok(longest));
        assert!(Runtime::parse("1193047:00:00").is_err());
        assert!(Runtime::parse("99999999999999999999:00:00").is_err());
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&Runtime::from_hms(1, 30, 0)).unwrap();
        assert_eq!(json, "\"01:30:00\"");
        assert!(serde_json::from_str::<Runtime>("\"90 min\"").is_err());
    }
}
