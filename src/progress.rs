//! Progress percentages for goals.
//!
//! Both calculations return a whole percentage in `0..=100` and round
//! half away from zero, so 0.5% becomes 1 and 2.5% becomes 3.

use crate::models::{Goal, UltimateGoal};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// Share of the `start..end` interval that has elapsed at `now`.
pub fn date_range_progress(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> u8 {
    if now <= start {
        return 0;
    }
    if now >= end {
        return 100;
    }

    // start < now < end, so both spans are strictly positive here.
    let total = i128::from((end - start).num_milliseconds());
    let passed = i128::from((now - start).num_milliseconds());
    let rounded = (200 * passed + total) / (2 * total);
    rounded.clamp(0, 100) as u8
}

/// Share of `target` covered by `current`, capped at 100.
pub fn amount_progress(current: Decimal, target: Decimal) -> u8 {
    if target <= Decimal::ZERO || current <= Decimal::ZERO {
        return 0;
    }
    if current >= target {
        return 100;
    }

    // 0 < current < target: the quotient is below one, so neither step can overflow.
    current
        .checked_div(target)
        .and_then(|fraction| fraction.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0)
}

/// Goal dates count from UTC midnight, the instant a browser assigns to a
/// bare `YYYY-MM-DD` string.
pub fn goal_progress(goal: &Goal, now: DateTime<Utc>) -> u8 {
    date_range_progress(
        goal.start_date.and_time(NaiveTime::MIN),
        goal.end_date.and_time(NaiveTime::MIN),
        now.naive_utc(),
    )
}

pub fn ultimate_goal_progress(goal: &UltimateGoal) -> u8 {
    amount_progress(goal.current_amount, goal.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn date_progress_is_zero_at_start_and_full_at_end() {
        let start = at(2026, 1, 1);
        let end = at(2026, 1, 11);
        assert_eq!(date_range_progress(start, end, start), 0);
        assert_eq!(date_range_progress(start, end, end), 100);
        assert_eq!(date_range_progress(start, end, start - Duration::days(3)), 0);
        assert_eq!(date_range_progress(start, end, end + Duration::days(3)), 100);
    }

    #[test]
    fn date_progress_interpolates_linearly() {
        let start = at(2026, 1, 1);
        let end = at(2026, 1, 11);
        assert_eq!(date_range_progress(start, end, at(2026, 1, 2)), 10);
        assert_eq!(date_range_progress(start, end, at(2026, 1, 6)), 50);
        assert_eq!(date_range_progress(start, end, at(2026, 1, 9)), 80);
    }

    #[test]
    fn date_progress_rounds_midpoints_away_from_zero() {
        let start = at(2026, 1, 1);
        let end = start + Duration::seconds(200);
        // 1s of 200s is 0.5%
        assert_eq!(date_range_progress(start, end, start + Duration::seconds(1)), 1);
        // 5s of 200s is 2.5%
        assert_eq!(date_range_progress(start, end, start + Duration::seconds(5)), 3);
        // 199s of 200s is 99.5%, still short of the end
        assert_eq!(date_range_progress(start, end, start + Duration::seconds(199)), 100);
        // 0.4% rounds down
        let end = start + Duration::seconds(1000);
        assert_eq!(date_range_progress(start, end, start + Duration::seconds(4)), 0);
    }

    #[test]
    fn date_progress_with_equal_bounds_never_divides() {
        let instant = at(2026, 6, 1);
        assert_eq!(date_range_progress(instant, instant, instant - Duration::seconds(1)), 0);
        assert_eq!(date_range_progress(instant, instant, instant), 0);
        assert_eq!(date_range_progress(instant, instant, instant + Duration::seconds(1)), 100);
    }

    #[test]
    fn date_progress_is_monotonic_and_bounded() {
        let start = at(2026, 1, 1);
        let end = at(2026, 4, 17);
        let mut previous = 0;
        let mut now = start - Duration::days(5);
        while now <= end + Duration::days(5) {
            let value = date_range_progress(start, end, now);
            assert!(value <= 100);
            assert!(value >= previous, "progress went backwards at {now}");
            previous = value;
            now += Duration::hours(7);
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn amount_progress_guards_non_positive_targets() {
        assert_eq!(amount_progress(dec!(500), Decimal::ZERO), 0);
        assert_eq!(amount_progress(dec!(500), dec!(-10)), 0);
        assert_eq!(amount_progress(Decimal::ZERO, Decimal::ZERO), 0);
    }

    #[test]
    fn amount_progress_caps_at_one_hundred() {
        assert_eq!(amount_progress(dec!(15000), dec!(10000)), 100);
        assert_eq!(amount_progress(dec!(10000), dec!(10000)), 100);
    }

    #[test]
    fn amount_progress_rounds_half_away_from_zero() {
        assert_eq!(amount_progress(dec!(2500), dec!(10000)), 25);
        assert_eq!(amount_progress(dec!(1), dec!(200)), 1);
        assert_eq!(amount_progress(dec!(5), dec!(200)), 3);
        assert_eq!(amount_progress(dec!(0.4), dec!(100)), 0);
        assert_eq!(amount_progress(dec!(99.5), dec!(100)), 100);
    }

    #[test]
    fn amount_progress_clamps_negative_current_to_zero() {
        assert_eq!(amount_progress(dec!(-50), dec!(100)), 0);
    }

    #[test]
    fn amount_progress_saturates_on_extreme_magnitudes() {
        let huge = dec!(1000000000000000000000000000);
        assert_eq!(amount_progress(huge, huge), 100);
        assert_eq!(amount_progress(dec!(1), dec!(0.0000000000000000000000000001)), 100);
        assert_eq!(amount_progress(Decimal::MAX, Decimal::MAX), 100);
        assert_eq!(amount_progress(Decimal::MAX, dec!(0.0000000000000000000000000001)), 100);
        assert_eq!(amount_progress(dec!(0.0000000000000000000000000001), Decimal::MAX), 0);
        assert_eq!(amount_progress(Decimal::MIN, dec!(0.0000000000000000000000000001)), 0);
        assert_eq!(amount_progress(huge / dec!(4), huge), 25);
        assert_eq!(amount_progress(huge, huge * dec!(10)), 10);
        assert_eq!(amount_progress(Decimal::MAX / dec!(2), Decimal::MAX), 50);
    }

    #[test]
    fn goal_progress_uses_calendar_dates_at_utc_midnight() {
        let goal = Goal {
            id: 1,
            name: "Gym".to_string(),
            description: None,
            target_amount: Decimal::ZERO,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            category: crate::models::Category::SportsRecreation,
            motivation: None,
        };
        assert_eq!(goal_progress(&goal, at(2026, 3, 2).and_utc()), 25);
        assert_eq!(
            goal_progress(&goal, (at(2026, 3, 3) + Duration::hours(12)).and_utc()),
            63
        );

        // 23:00 on the last day in UTC-2 is already past the UTC end.
        let late_evening = DateTime::parse_from_rfc3339("2026-03-04T23:00:00-02:00").unwrap();
        assert_eq!(goal_progress(&goal, late_evening.with_timezone(&Utc)), 100);
        let early_start = DateTime::parse_from_rfc3339("2026-03-01T00:30:00+02:00").unwrap();
        assert_eq!(goal_progress(&goal, early_start.with_timezone(&Utc)), 0);
    }
}
