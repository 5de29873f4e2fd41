//! Weekly holiday calendar.
//!
//! A set of weekdays is globally non-working for every worker. Work
//! only progresses on working days; a holiday is skipped in full.
//! There is no partial-day availability.
//!
//! # Time Model
//! All instants are epoch milliseconds. Day boundaries are taken at local
//! midnight in the calendar's time zone. [`calculate_end_time`] uses UTC;
//! [`WorkCalendar`] carries an explicit fixed UTC offset.
//!
//! # Degenerate Calendar
//! When all seven weekdays are holidays there is no working day to
//! advance to, and durations are applied as plain addition.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Days per week.
pub const DAYS_PER_WEEK: u8 = 7;

/// A set of non-working weekdays (0 = Sunday ... 6 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct HolidaySet {
    mask: u8,
}

impl HolidaySet {
    /// Creates an empty set (every day is a working day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Saturday and Sunday.
    pub fn weekends() -> Self {
        Self { mask: 0b100_0001 }
    }

    /// Builds a set from weekday numbers, rejecting values above 6.
    pub fn from_weekdays(days: &[u8]) -> Result<Self> {
        let mut set = Self::new();
        for &day in days {
            set.insert(day)?;
        }
        Ok(set)
    }

    /// Adds a weekday.
    pub fn insert(&mut self, weekday: u8) -> Result<()> {
        if weekday >= DAYS_PER_WEEK {
            return Err(PlannerError::InvalidWeekday(weekday));
        }
        self.mask |= 1 << weekday;
        Ok(())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_weekday(mut self, weekday: u8) -> Result<Self> {
        self.insert(weekday)?;
        Ok(self)
    }

    /// Whether the given weekday is a holiday.
    #[inline]
    pub fn is_holiday(&self, weekday: u8) -> bool {
        weekday < DAYS_PER_WEEK && self.mask & (1 << weekday) != 0
    }

    /// Whether no weekday is a holiday.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Whether every weekday is a holiday.
    #[inline]
    pub fn is_all_week(&self) -> bool {
        self.mask == 0b111_1111
    }

    /// Number of working days per week.
    pub fn working_days_per_week(&self) -> u8 {
        DAYS_PER_WEEK - self.mask.count_ones() as u8
    }

    /// Holiday weekdays in ascending order.
    pub fn weekdays(&self) -> Vec<u8> {
        (0..DAYS_PER_WEEK).filter(|&d| self.is_holiday(d)).collect()
    }
}

impl TryFrom<Vec<u8>> for HolidaySet {
    type Error = PlannerError;

    fn try_from(days: Vec<u8>) -> Result<Self> {
        Self::from_weekdays(&days)
    }
}

impl From<HolidaySet> for Vec<u8> {
    fn from(set: HolidaySet) -> Self {
        set.weekdays()
    }
}

/// Holiday calendar anchored to a fixed UTC offset.
///
/// # Example
/// ```
/// use u_timeline::models::{HolidaySet, WorkCalendar};
///
/// let cal = WorkCalendar::new(HolidaySet::weekends());
/// // Friday 2024-01-05 12:00 UTC + 24h of work lands on Monday noon.
/// let friday_noon = 1_704_456_000_000;
/// let end = cal.end_time(friday_noon, 86_400_000);
/// assert_eq!(end, friday_noon + 3 * 86_400_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: HolidaySet,
    offset: FixedOffset,
}

impl WorkCalendar {
    /// Creates a UTC calendar.
    pub fn new(holidays: HolidaySet) -> Self {
        Self {
            holidays,
            offset: Utc.fix(),
        }
    }

    /// Creates a calendar with no holidays.
    pub fn always_available() -> Self {
        Self::new(HolidaySet::new())
    }

    /// Anchors day boundaries at the given offset east of UTC.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Result<Self> {
        self.offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(PlannerError::InvalidUtcOffset(minutes))?;
        Ok(self)
    }

    /// The holiday weekdays.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// The UTC offset used for day boundaries.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Finish instant for `duration_ms` of work starting at `start_ms`.
    pub fn end_time(&self, start_ms: i64, duration_ms: i64) -> i64 {
        end_time_in(&self.offset, start_ms, duration_ms, &self.holidays)
    }

    /// Whether the day containing `time_ms` is a working day.
    pub fn is_working_day(&self, time_ms: i64) -> bool {
        match self.offset.timestamp_millis_opt(time_ms).single() {
            Some(local) => !self.holidays.is_holiday(weekday_of(&local)),
            None => true,
        }
    }

    /// Amount of working (non-holiday) time in `[start_ms, end_ms)`.
    ///
    /// With an all-week holiday set the whole range counts, matching
    /// how [`end_time`](Self::end_time) treats that calendar.
    pub fn working_time_between(&self, start_ms: i64, end_ms: i64) -> i64 {
        if end_ms <= start_ms {
            return 0;
        }
        if self.holidays.is_empty() || self.holidays.is_all_week() {
            return end_ms - start_ms;
        }

        let mut current = start_ms;
        let mut working = 0;
        while current < end_ms {
            let Some(local) = self.offset.timestamp_millis_opt(current).single() else {
                return working + (end_ms - current);
            };
            let boundary = next_midnight_ms(&self.offset, &local).min(end_ms);
            if !self.holidays.is_holiday(weekday_of(&local)) {
                working += boundary - current;
            }
            current = boundary;
        }
        working
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::always_available()
    }
}

/// Finish instant for `duration_ms` of work starting at `start_ms` (UTC days).
///
/// Walks forward one day segment at a time. Holidays advance the clock to
/// the next midnight without consuming any duration; working days consume
/// up to the time remaining before midnight. Non-positive durations finish
/// at `start_ms`.
pub fn calculate_end_time(start_ms: i64, duration_ms: i64, holidays: &HolidaySet) -> i64 {
    end_time_in(&Utc, start_ms, duration_ms, holidays)
}

/// Calendar walk in an arbitrary time zone.
pub fn end_time_in<Tz: TimeZone>(
    tz: &Tz,
    start_ms: i64,
    duration_ms: i64,
    holidays: &HolidaySet,
) -> i64 {
    if duration_ms <= 0 {
        return start_ms;
    }
    if holidays.is_all_week() {
        return start_ms.saturating_add(duration_ms);
    }

    let mut current = start_ms;
    let mut remaining = duration_ms;

    while remaining > 0 {
        let Some(local) = tz.timestamp_millis_opt(current).single() else {
            // Outside chrono's representable range; no calendar to consult.
            return current.saturating_add(remaining);
        };
        let midnight = next_midnight_ms(tz, &local);

        if holidays.is_holiday(weekday_of(&local)) {
            current = midnight;
        } else {
            let step = remaining.min(midnight - current);
            current += step;
            remaining -= step;
        }
    }

    current
}

fn weekday_of<Tz: TimeZone>(local: &DateTime<Tz>) -> u8 {
    local.weekday().num_days_from_sunday() as u8
}

/// Epoch ms of the local midnight that starts the day after `local`.
fn next_midnight_ms<Tz: TimeZone>(tz: &Tz, local: &DateTime<Tz>) -> i64 {
    let next = local
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));

    let Some(naive) = next else {
        return i64::MAX;
    };

    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.timestamp_millis(),
        // Midnight skipped by a zone transition: keep the current offset.
        None => shift_by_offset(naive, local.offset().fix()),
    }
}

fn shift_by_offset(naive: NaiveDateTime, offset: FixedOffset) -> i64 {
    naive.and_utc().timestamp_millis() - i64::from(offset.local_minus_utc()) * 1000
}
