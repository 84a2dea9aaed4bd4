use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Weekday,
};

use crate::errors::ClockError;
use crate::options::Fuzziness;

pub const MINUTES_PER_DAY: u64 = 24 * 60;

/// A resolved local wall-clock date and time.
///
/// No time zone arithmetic ever happens on a `WallClock`: whatever zone produced it, only
/// its local calendar fields are used. Seconds are kept but never influence the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock(NaiveDateTime);

impl WallClock {
    /// Build a wall-clock time from calendar fields.
    ///
    /// # Errors
    ///
    /// - `ClockError::InvalidTimestamp`: the fields do not name a real date and time
    ///   (month 13, February 30th, hour 24, minute 60...).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, ClockError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ClockError::InvalidTimestamp(format!("{year:04}-{month:02}-{day:02} is not a date"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            ClockError::InvalidTimestamp(format!("{hour:02}:{minute:02} is not a time of day"))
        })?;
        Ok(WallClock(date.and_time(time)))
    }

    /// Resolve the result of a local-time lookup, such as `Tz::from_local_datetime`.
    ///
    /// Ambiguous results (a repeated hour when clocks fall back) share one wall clock, so the
    /// earlier is taken. A local time skipped by a forward jump has no wall clock at all.
    pub fn from_local_result<Tz: TimeZone>(
        result: LocalResult<DateTime<Tz>>,
    ) -> Result<Self, ClockError> {
        match result {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(WallClock::from(&dt)),
            LocalResult::None => Err(ClockError::InvalidTimestamp(
                "local time does not exist in its time zone".to_string(),
            )),
        }
    }

    /// Start of the given minute of `date`.
    pub(crate) fn at_minute_of_day(
        date: NaiveDate,
        minute_of_day: u64,
    ) -> Result<Self, ClockError> {
        let hour = (minute_of_day / 60) as u32;
        let minute = (minute_of_day % 60) as u32;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(|time| WallClock(date.and_time(time)))
            .ok_or_else(|| {
                ClockError::InvalidTimestamp(format!(
                    "minute {minute_of_day} is past the end of the day"
                ))
            })
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn minute_of_day(&self) -> u64 {
        u64::from(self.hour()) * 60 + u64::from(self.minute())
    }
}

impl From<NaiveDateTime> for WallClock {
    fn from(naive: NaiveDateTime) -> Self {
        WallClock(naive)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for WallClock {
    fn from(time: &DateTime<Tz>) -> Self {
        WallClock(time.naive_local())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for WallClock {
    fn from(time: DateTime<Tz>) -> Self {
        WallClock::from(&time)
    }
}

impl std::fmt::Display for WallClock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:02}:{:02}", self.date(), self.hour(), self.minute())
    }
}

/// The hour, minute and calendar date a time rounds to.
///
/// The date can be later than the input's when rounding crosses midnight. Ordering follows the
/// clock: date first, then hour, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundedInstant {
    pub date: NaiveDate,
    /// 0 to 23.
    pub hour: u32,
    /// 0 to 59.
    pub minute: u32,
}

impl RoundedInstant {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Day of month, 1 to 31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub fn is_noon(&self) -> bool {
        self.hour == 12 && self.minute == 0
    }

    /// The rounded instant as a wall-clock time, seconds zeroed.
    pub fn to_wall_clock(&self) -> Result<WallClock, ClockError> {
        let date = self.date;
        WallClock::new(
            date.year(),
            date.month(),
            date.day(),
            self.hour,
            self.minute,
        )
    }
}

// Index of the grid point nearest to `minute_of_day`, ties going to the later one.
fn grid_index(minute_of_day: u64, step: u64) -> u64 {
    (2 * minute_of_day + step) / (2 * step)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, ClockError> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        ClockError::InvalidTimestamp(format!("{date} plus {days} day(s) is out of range"))
    })
}

/// Round a wall-clock time to the nearest multiple of `fuzziness` minutes since midnight.
///
/// Halfway values round up. Rounding past the last minute of the day carries into the
/// following day(s), so weekday and day of month follow the rounded time.
///
/// # Errors
///
/// - `ClockError::InvalidTimestamp`: the carried date falls outside the supported calendar.
pub fn round(time: &WallClock, fuzziness: Fuzziness) -> Result<RoundedInstant, ClockError> {
    let step = u64::from(fuzziness.minutes());
    let rounded = grid_index(time.minute_of_day(), step) * step;

    let carry_days = rounded / MINUTES_PER_DAY;
    let minute_of_day = rounded % MINUTES_PER_DAY;
    let date = add_days(time.date(), carry_days)?;

    let instant = RoundedInstant {
        date,
        hour: (minute_of_day / 60) as u32,
        minute: (minute_of_day % 60) as u32,
    };
    log::trace!(
        "rounded {time} to {:02}:{:02} on {} ({fuzziness})",
        instant.hour,
        instant.minute,
        instant.date
    );
    Ok(instant)
}

/// Find the first minute strictly after `time` at which the rounded instant changes.
///
/// A display only needs to redraw at these points.
pub fn next_transition(time: &WallClock, fuzziness: Fuzziness) -> Result<WallClock, ClockError> {
    let step = u64::from(fuzziness.minutes());
    let current = round(time, fuzziness)?;

    let mut date = time.date();
    let mut minute_of_day = time.minute_of_day();
    loop {
        // First minute that rounds to the next grid point.
        let next = ((2 * grid_index(minute_of_day, step) + 1) * step).div_ceil(2);
        if next < MINUTES_PER_DAY {
            return WallClock::at_minute_of_day(date, next);
        }

        // The grid restarts at every midnight.
        date = add_days(date, 1)?;
        let midnight = WallClock::at_minute_of_day(date, 0)?;
        if round(&midnight, fuzziness)? != current {
            return Ok(midnight);
        }
        minute_of_day = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn wall(day: u32, hour: u32, minute: u32) -> WallClock {
        WallClock::new(2025, 9, day, hour, minute).unwrap()
    }

    fn fuzz(minutes: i64) -> Fuzziness {
        Fuzziness::new(minutes).unwrap()
    }

    #[rstest]
    #[case(8, 5, 8, 10)]
    #[case(7, 5, 8, 5)]
    #[case(2, 5, 8, 0)]
    #[case(3, 5, 8, 5)]
    #[case(14, 15, 8, 15)]
    #[case(7, 15, 8, 0)]
    #[case(52, 15, 8, 45)]
    #[case(53, 15, 9, 0)]
    fn test_round_minutes(
        #[case] minute: u32,
        #[case] step: i64,
        #[case] hour: u32,
        #[case] expected_minute: u32,
    ) {
        let rounded = round(&wall(6, 8, minute), fuzz(step)).unwrap();
        assert_eq!(rounded.hour, hour);
        assert_eq!(rounded.minute, expected_minute);
        assert_eq!(rounded.day(), 6);
    }

    #[rstest]
    fn test_on_grid_is_fixed_point(#[values(1, 2, 5, 10, 15, 20, 30, 60)] step: i64) {
        for minute_of_day in (0..MINUTES_PER_DAY).step_by(step as usize) {
            let time = WallClock::at_minute_of_day(wall(6, 0, 0).date(), minute_of_day).unwrap();
            let rounded = round(&time, fuzz(step)).unwrap();
            assert_eq!((rounded.hour, rounded.minute), (time.hour(), time.minute()));
            assert_eq!(rounded.date, time.date());
        }
    }

    #[rstest]
    fn test_ties_round_up(#[values(2, 4, 10, 20, 30)] step: i64) {
        let half = step as u64 / 2;
        for k in 0..(MINUTES_PER_DAY / step as u64) {
            let tie = k * step as u64 + half;
            let time = WallClock::at_minute_of_day(wall(6, 0, 0).date(), tie).unwrap();
            let rounded = round(&time, fuzz(step)).unwrap();
            let expected = (k + 1) * step as u64;
            assert_eq!(
                (rounded.date, u64::from(rounded.hour) * 60 + u64::from(rounded.minute)),
                if expected == MINUTES_PER_DAY {
                    (wall(7, 0, 0).date(), 0)
                } else {
                    (time.date(), expected)
                },
                "tie at minute {tie} with step {step}"
            );
        }
    }

    #[test]
    fn test_rollover_into_next_day() {
        let rounded = round(&wall(6, 23, 58), fuzz(5)).unwrap();
        assert!(rounded.is_midnight());
        assert_eq!(rounded.day(), 7);
        assert_eq!(rounded.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_rollover_into_next_month_and_year() {
        let rounded = round(&WallClock::new(2025, 9, 30, 23, 55).unwrap(), fuzz(10)).unwrap();
        assert_eq!(rounded.date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());

        let rounded = round(&WallClock::new(2025, 12, 31, 23, 59).unwrap(), fuzz(15)).unwrap();
        assert_eq!(rounded.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(rounded.is_midnight());
    }

    #[test]
    fn test_odd_fuzziness_can_overshoot_midnight() {
        // 23:59 with 7-minute steps lands on grid point 1442.
        let rounded = round(&wall(6, 23, 59), fuzz(7)).unwrap();
        assert_eq!((rounded.day(), rounded.hour, rounded.minute), (7, 0, 2));
    }

    #[test]
    fn test_rollover_at_end_of_calendar_fails() {
        let time = WallClock::from(NaiveDateTime::MAX);
        assert!(round(&time, fuzz(5)).unwrap_err().is_invalid_timestamp());
    }

    #[rstest]
    #[case(2025, 2, 29, 10, 0)]
    #[case(2025, 13, 1, 10, 0)]
    #[case(2025, 9, 31, 10, 0)]
    #[case(2025, 9, 6, 24, 0)]
    #[case(2025, 9, 6, 10, 60)]
    fn test_invalid_wall_clock(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
    ) {
        let err = WallClock::new(year, month, day, hour, minute).unwrap_err();
        assert!(err.kind().is_invalid_input());
    }

    #[test]
    fn test_from_local_result() {
        use chrono::FixedOffset;

        let offset = FixedOffset::east_opt(3600).unwrap();
        let time =
            WallClock::from_local_result(offset.with_ymd_and_hms(2025, 9, 6, 9, 20, 0)).unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 20));

        let missing: LocalResult<DateTime<FixedOffset>> = LocalResult::None;
        assert!(WallClock::from_local_result(missing).is_err());
    }

    #[rstest]
    #[case(8, 0, 5, 8, 3)]
    #[case(8, 2, 5, 8, 3)]
    #[case(8, 3, 5, 8, 8)]
    #[case(8, 7, 15, 8, 8)]
    #[case(8, 8, 15, 8, 23)]
    #[case(8, 0, 10, 8, 5)]
    #[case(8, 0, 1, 8, 1)]
    fn test_next_transition_within_day(
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] step: i64,
        #[case] next_hour: u32,
        #[case] next_minute: u32,
    ) {
        let next = next_transition(&wall(6, hour, minute), fuzz(step)).unwrap();
        assert_eq!(next, wall(6, next_hour, next_minute));
    }

    #[test]
    fn test_next_transition_skips_unchanged_midnight() {
        // 23:58 already shows Sunday midnight; nothing changes until 00:03.
        let next = next_transition(&wall(6, 23, 58), fuzz(5)).unwrap();
        assert_eq!(next, wall(7, 0, 3));
    }

    #[test]
    fn test_next_transition_at_midnight_when_grid_restarts() {
        // With 7-minute steps 23:59 shows 00:02, but midnight itself shows 00:00.
        let next = next_transition(&wall(6, 23, 59), fuzz(7)).unwrap();
        assert_eq!(next, wall(7, 0, 0));
    }

    #[rstest]
    fn test_next_transition_changes_rounding(#[values(1, 5, 7, 10, 15, 45, 90)] step: i64) {
        let mut time = wall(6, 0, 0);
        for _ in 0..50 {
            let next = next_transition(&time, fuzz(step)).unwrap();
            assert!(next > time);
            assert_ne!(round(&next, fuzz(step)).unwrap(), round(&time, fuzz(step)).unwrap());
            // Nothing in between changes.
            let before = WallClock::from(next.naive() - chrono::Duration::minutes(1));
            assert_eq!(round(&before, fuzz(step)).unwrap(), round(&time, fuzz(step)).unwrap());
            time = next;
        }
    }
}
