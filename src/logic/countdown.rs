// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Countdown arithmetic for the launch banner on the home page.

use time::{Duration, OffsetDateTime};

/// How far past startup the countdown target sits.
const COUNTDOWN_DAYS: i64 = 30;

/// Remaining time decomposed for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// A countdown toward a fixed target instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target: OffsetDateTime,
}

impl Countdown {
    /// Countdown ending thirty days after `now`.
    pub fn starting_at(now: OffsetDateTime) -> Self {
        Self {
            target: now + Duration::days(COUNTDOWN_DAYS),
        }
    }

    /// Countdown toward an explicit target.
    pub fn with_target(target: OffsetDateTime) -> Self {
        Self { target }
    }

    /// Remaining time split into days/hours/minutes/seconds, or `None`
    /// once the target has passed.
    pub fn remaining(&self, now: OffsetDateTime) -> Option<CountdownParts> {
        let left = self.target - now;
        if left.is_negative() {
            return None;
        }

        let total = left.whole_seconds();
        Some(CountdownParts {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn decomposes_remaining_time() {
        let now = datetime!(2025-01-01 00:00:00 UTC);
        let target = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
            + Duration::seconds(5);

        let parts = Countdown::with_target(target).remaining(now).unwrap();

        assert_eq!(
            parts,
            CountdownParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn zero_remaining_still_renders_zeros() {
        let now = datetime!(2025-01-01 00:00:00 UTC);

        let parts = Countdown::with_target(now).remaining(now).unwrap();

        assert_eq!(
            parts,
            CountdownParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn past_target_yields_none() {
        let now = datetime!(2025-01-01 00:00:01 UTC);
        let target = datetime!(2025-01-01 00:00:00 UTC);

        assert_eq!(Countdown::with_target(target).remaining(now), None);
    }

    #[test]
    fn starting_at_targets_thirty_days_out() {
        let now = datetime!(2025-06-15 12:00:00 UTC);

        let parts = Countdown::starting_at(now).remaining(now).unwrap();

        assert_eq!(parts.days, 30);
        assert_eq!(parts.hours, 0);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0);
    }
}
