//! Broken fishing line counter.
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::MAX_BROKEN_LINES;

/// Number of broken lines, always within `0..=MAX_BROKEN_LINES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct BrokenLines(u8);

impl BrokenLines {
    pub const MAX: u8 = MAX_BROKEN_LINES;

    /// Clamp an arbitrary stored number into range. NaN reads as zero.
    #[must_use]
    pub fn from_stored(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = value.clamp(0.0, f64::from(Self::MAX)).trunc() as u8;
        Self(clamped)
    }

    #[must_use]
    pub const fn count(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn can_add(self) -> bool {
        self.0 < Self::MAX
    }

    #[must_use]
    pub const fn can_reset(self) -> bool {
        self.0 > 0
    }

    /// Record one more broken line. No-op at the cap.
    pub const fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.0 += 1;
        true
    }

    pub const fn reset(&mut self) -> bool {
        let changed = self.0 != 0;
        self.0 = 0;
        changed
    }
}

impl<'de> Deserialize<'de> for BrokenLines {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw.map_or_else(Self::default, Self::from_stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_never_exceeds_cap() {
        let mut lines = BrokenLines::default();
        for _ in 0..200 {
            lines.add();
        }
        assert_eq!(lines.count(), 120);
        assert!(!lines.can_add());
        assert!(!lines.add());
    }

    #[test]
    fn reset_reports_change_only_when_non_zero() {
        let mut lines = BrokenLines::default();
        assert!(!lines.reset());
        lines.add();
        assert!(lines.can_reset());
        assert!(lines.reset());
        assert_eq!(lines.count(), 0);
    }

    #[test]
    fn stored_values_are_clamped() {
        assert_eq!(BrokenLines::from_stored(-4.0).count(), 0);
        assert_eq!(BrokenLines::from_stored(12.7).count(), 12);
        assert_eq!(BrokenLines::from_stored(999.0).count(), 120);
        assert_eq!(BrokenLines::from_stored(f64::NAN).count(), 0);

        let parsed: BrokenLines = serde_json::from_str("500").unwrap();
        assert_eq!(parsed.count(), 120);
        let parsed: BrokenLines = serde_json::from_str("null").unwrap();
        assert_eq!(parsed.count(), 0);
        assert_eq!(serde_json::to_string(&BrokenLines(7)).unwrap(), "7");
    }
}
