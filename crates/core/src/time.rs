use chrono::{Duration, Local, NaiveDateTime, TimeDelta};

/// Wall clock for the relationship counter. Local time, because the
/// anniversary is a local date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Moves a fixed clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Elapsed time since the start of the relationship, in the coarse
/// calendar the counter displays: 365-day years and 30-day months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipSpan {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_days: i64,
}

impl RelationshipSpan {
    /// A `start` after `now` yields an all-zero span.
    #[must_use]
    pub fn between(start: NaiveDateTime, now: NaiveDateTime) -> Self {
        let elapsed = (now - start).max(TimeDelta::zero());
        let total_days = elapsed.num_days();
        let remainder = elapsed.num_seconds() - total_days * 86_400;

        Self {
            years: total_days / 365,
            months: (total_days % 365) / 30,
            days: (total_days % 365) % 30,
            hours: remainder / 3600,
            minutes: (remainder % 3600) / 60,
            seconds: remainder % 60,
            total_days,
        }
    }
}

/// Deterministic timestamp for tests: 2024-06-12 18:30:15.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 6, 12)
        .and_then(|date| date.and_hms_opt(18, 30, 15))
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_relationship_start;

    #[test]
    fn span_uses_coarse_calendar() {
        let span = RelationshipSpan::between(default_relationship_start(), fixed_now());
        // 2021-05-29 -> 2024-06-12 is 1110 days.
        assert_eq!(span.total_days, 1110);
        assert_eq!(span.years, 3);
        assert_eq!(span.months, 0);
        assert_eq!(span.days, 15);
        assert_eq!((span.hours, span.minutes, span.seconds), (18, 30, 15));
    }

    #[test]
    fn future_start_clamps_to_zero() {
        let now = fixed_now();
        let span = RelationshipSpan::between(now + Duration::days(3), now);
        assert_eq!(span, RelationshipSpan::default());
    }

    #[test]
    fn fixed_clock_advances() {
        let mut clock = fixed_clock();
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), fixed_now() + Duration::seconds(90));

        let mut system = Clock::system();
        system.advance(Duration::days(1));
        assert!(matches!(system, Clock::System));
    }
}
