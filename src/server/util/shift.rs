//! Shift resolution in the bakery's local time.
//!
//! A day is split into two shifts by two local hour boundaries: morning runs from
//! `morning_start` up to `night_start`, night runs from `night_start` until the next
//! day's `morning_start`. All instants handled here are UTC; the fixed offset is only
//! applied to decide which local hour an instant falls on.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Timelike, Utc,
};
use entity::sea_orm_active_enums::Shift;

use crate::server::error::config::ConfigError;

/// Canonical morning start hour (local)
pub const DEFAULT_MORNING_START_HOUR: u32 = 10;
/// Canonical night start hour (local)
pub const DEFAULT_NIGHT_START_HOUR: u32 = 22;
/// Default local offset from UTC in minutes (UTC+01:00)
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 60;

/// One concrete occurrence of a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftWindow {
    pub shift: Shift,
    /// Local date the shift starts on
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    /// Exclusive end
    pub end: DateTime<Utc>,
}

impl ShiftWindow {
    /// Whether `instant` falls within `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Same as [`Self::contains`] for naive UTC timestamps as stored in the database.
    pub fn contains_naive(&self, timestamp: NaiveDateTime) -> bool {
        self.contains(timestamp.and_utc())
    }
}

/// A local calendar day expressed as UTC bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDay {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LocalDay {
    pub fn contains_naive(&self, timestamp: NaiveDateTime) -> bool {
        let instant = timestamp.and_utc();
        self.start <= instant && instant < self.end
    }
}

/// Resolves instants to shifts for a fixed UTC offset and pair of hour boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftClock {
    offset: FixedOffset,
    morning_start: NaiveTime,
    night_start: NaiveTime,
}

impl Default for ShiftClock {
    fn default() -> Self {
        let hour = |hour| NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default();

        Self {
            offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
            morning_start: hour(DEFAULT_MORNING_START_HOUR),
            night_start: hour(DEFAULT_NIGHT_START_HOUR),
        }
    }
}

impl ShiftClock {
    /// Creates a new [`ShiftClock`].
    ///
    /// # Arguments
    /// - `utc_offset_minutes` - Local offset east of UTC in minutes
    /// - `morning_start_hour` - Local hour the morning shift starts
    /// - `night_start_hour` - Local hour the night shift starts
    ///
    /// # Returns
    /// - `Ok(ShiftClock)` - Valid configuration
    /// - `Err(ConfigError::InvalidShiftBoundaries)` - Offset out of range, an hour ≥ 24,
    ///   or morning not starting before night
    pub fn new(
        utc_offset_minutes: i32,
        morning_start_hour: u32,
        night_start_hour: u32,
    ) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidShiftBoundaries(reason);

        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| invalid(format!("UTC offset {}m is out of range", utc_offset_minutes)))?;

        if morning_start_hour >= night_start_hour {
            return Err(invalid(format!(
                "morning start hour {} must be before night start hour {}",
                morning_start_hour, night_start_hour
            )));
        }

        let morning_start = NaiveTime::from_hms_opt(morning_start_hour, 0, 0)
            .ok_or_else(|| invalid(format!("invalid morning start hour {}", morning_start_hour)))?;
        let night_start = NaiveTime::from_hms_opt(night_start_hour, 0, 0)
            .ok_or_else(|| invalid(format!("invalid night start hour {}", night_start_hour)))?;

        Ok(Self {
            offset,
            morning_start,
            night_start,
        })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn offset_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.offset.local_minus_utc() as i64)
    }

    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() + self.offset_delta()
    }

    fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        (local - self.offset_delta()).and_utc()
    }

    /// Local calendar date of `instant`.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.to_local(instant).date()
    }

    /// Classify `instant` into the shift it falls in.
    pub fn shift_at(&self, instant: DateTime<Utc>) -> Shift {
        let hour = self.to_local(instant).hour();

        if hour >= self.morning_start.hour() && hour < self.night_start.hour() {
            Shift::Morning
        } else {
            Shift::Night
        }
    }

    /// The occurrence of `shift` starting on local `date`.
    ///
    /// A night shift starting on `date` ends on the following local day at the morning
    /// boundary.
    pub fn window(&self, shift: Shift, date: NaiveDate) -> ShiftWindow {
        let (start, end) = match shift {
            Shift::Morning => (
                date.and_time(self.morning_start),
                date.and_time(self.night_start),
            ),
            Shift::Night => (
                date.and_time(self.night_start),
                (date + TimeDelta::days(1)).and_time(self.morning_start),
            ),
        };

        ShiftWindow {
            shift,
            date,
            start: self.to_utc(start),
            end: self.to_utc(end),
        }
    }

    /// The shift occurrence containing `instant`.
    pub fn window_containing(&self, instant: DateTime<Utc>) -> ShiftWindow {
        let local = self.to_local(instant);
        let date = local.date();
        let time = local.time();

        if time < self.morning_start {
            // Early hours belong to the night shift which started the previous day
            self.window(Shift::Night, date - TimeDelta::days(1))
        } else if time < self.night_start {
            self.window(Shift::Morning, date)
        } else {
            self.window(Shift::Night, date)
        }
    }

    /// The most recent occurrence of `shift` which started at or before `now`.
    ///
    /// When `now` is inside `shift` this is the running occurrence, otherwise it is the
    /// one which most recently ended.
    pub fn latest_window(&self, shift: Shift, now: DateTime<Utc>) -> ShiftWindow {
        let window = self.window(shift, self.local_date(now));

        if window.start > now {
            self.window(shift, window.date - TimeDelta::days(1))
        } else {
            window
        }
    }

    /// UTC bounds of the local calendar day `date`.
    pub fn day_bounds(&self, date: NaiveDate) -> LocalDay {
        LocalDay {
            date,
            start: self.to_utc(date.and_time(NaiveTime::default())),
            end: self.to_utc((date + TimeDelta::days(1)).and_time(NaiveTime::default())),
        }
    }

    /// UTC bounds of the local calendar day containing `instant`.
    pub fn local_day(&self, instant: DateTime<Utc>) -> LocalDay {
        self.day_bounds(self.local_date(instant))
    }

    /// Parse a client supplied timestamp, falling back to `now` rather than failing.
    ///
    /// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM[:SS]` which is read as local time.
    pub fn parse_instant(&self, raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return now;
        };

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return instant.with_timezone(&Utc);
        }

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(local) = NaiveDateTime::parse_from_str(raw, format) {
                return self.to_utc(local);
            }
        }

        tracing::warn!(raw = %raw, "Unparseable timestamp, falling back to current time");

        now
    }
}
