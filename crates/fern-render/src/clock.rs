//! Source of the current year for copyright lines.

use chrono::Datelike;

pub trait Clock {
    fn current_year(&self) -> i32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock stuck on one year, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_clock() {
        assert_eq!(FixedClock(2031).current_year(), 2031);
        assert_eq!((&FixedClock(1999)).current_year(), 1999);
    }

    #[test]
    fn system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
