use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A meetup that repeats on the day of month of its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub title: String,
    pub description: String,
    pub location: String,
    pub(crate) first: NaiveDate,
    pub(crate) start: NaiveTime,
    pub(crate) end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("day of month must be at most 28, got {0}")]
    DayOutOfRange(u32),
    #[error("event must end after it starts ({start} - {end})")]
    EmptyTimeSpan { start: NaiveTime, end: NaiveTime },
}

/// The next occurrence of a [`Schedule`], in the time zone of the clock it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NextEvent {
    pub date: NaiveDate,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Everything the page needs to advertise the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Announcement {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub event: NextEvent,
    pub label: String,
    pub ics_link: &'static str,
    pub google_calendar_link: String,
}

impl Schedule {
    pub fn new(first: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        if first.day() > 28 {
            return Err(ScheduleError::DayOutOfRange(first.day()));
        }

        if start >= end {
            return Err(ScheduleError::EmptyTimeSpan { start, end });
        }

        Ok(Self {
            first,
            start,
            end,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.first.day()
    }

    #[must_use]
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    #[must_use]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            title: "Overcommitters Club".into(),
            description: "Take two hours back. Takes place wherever you are.".into(),
            location: "Wherever you are".into(),
            first: NaiveDate::from_ymd_opt(2019, 6, 13).unwrap(),
            start: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            end: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_is_the_thirteenth_in_the_evening() {
        let schedule = Schedule::default();
        assert_eq!(schedule.day(), 13);
        assert_eq!(schedule.start(), time(18, 30));
        assert_eq!(schedule.end(), time(20, 30));
        assert_eq!(schedule.first(), date(2019, 6, 13));
    }

    #[test]
    fn rejects_days_missing_from_some_months() {
        assert_eq!(
            Schedule::new(date(2019, 1, 29), time(18, 30), time(20, 30)),
            Err(ScheduleError::DayOutOfRange(29))
        );
        assert_eq!(
            Schedule::new(date(2019, 1, 31), time(18, 30), time(20, 30)),
            Err(ScheduleError::DayOutOfRange(31))
        );
        assert!(Schedule::new(date(2019, 1, 28), time(18, 30), time(20, 30)).is_ok());
    }

    #[test]
    fn rejects_events_that_do_not_end_after_start() {
        let err = Schedule::new(date(2019, 6, 13), time(20, 30), time(18, 30)).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyTimeSpan { .. }));
        assert!(Schedule::new(date(2019, 6, 13), time(18, 30), time(18, 30)).is_err());
    }

    #[test]
    fn custom_schedule_keeps_default_texts() {
        let schedule = Schedule::new(date(2020, 3, 1), time(9, 0), time(10, 0)).unwrap();
        assert_eq!(schedule.day(), 1);
        assert_eq!(schedule.title, "Overcommitters Club");
    }
}
