//! Launch-offer countdown of the call-to-action section.

use std::fmt;

/// Whole seconds left, ticked down once per second, never below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Countdown starting at `hours:00:00`.
    pub fn from_hours(hours: u32) -> Self {
        Self {
            remaining: hours.saturating_mul(3600),
        }
    }

    /// One second passed. Returns false once already at zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// True at 00:00:00.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// `(hours, minutes, seconds)` left.
    pub fn parts(&self) -> (u32, u32, u32) {
        (self.remaining / 3600, self.remaining / 60 % 60, self.remaining % 60)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.parts();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rolls_over_hours_and_minutes() {
        let mut c = Countdown::from_hours(24);
        assert_eq!(c.to_string(), "24:00:00");
        c.tick();
        assert_eq!(c.to_string(), "23:59:59");
        for _ in 0..59 {
            c.tick();
        }
        assert_eq!(c.parts(), (23, 59, 0));
        c.tick();
        assert_eq!(c.parts(), (23, 58, 59));
    }

    #[test]
    fn stops_at_zero() {
        let mut c = Countdown::from_hours(1);
        for _ in 0..3600 {
            assert!(c.tick());
        }
        assert!(c.is_finished());
        assert!(!c.tick());
        assert_eq!(c.to_string(), "00:00:00");
    }
}
