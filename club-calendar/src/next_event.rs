use chrono::{
    DateTime, Datelike, Days, FixedOffset, LocalResult, Months, NaiveDateTime, NaiveTime, Offset,
    TimeZone,
};

use crate::{Announcement, NextEvent, Schedule, ICS_PATH};

impl Schedule {
    /// Finds the occurrence to advertise at `now`.
    ///
    /// The meetup day counts as passed from its midnight on, so on the day itself
    /// the following month is announced even before the event starts.
    #[must_use]
    pub fn next_event<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> NextEvent {
        let today = now.date_naive();
        let mut date =
            today - Days::new(u64::from(today.day())) + Days::new(u64::from(self.day()));

        if today > date || (today == date && now.time() > NaiveTime::default()) {
            date = date + Months::new(1);
        }

        let tz = now.timezone();
        let fallback = now.offset().fix();

        NextEvent {
            date,
            start: localize(&tz, date.and_time(self.start), fallback),
            end: localize(&tz, date.and_time(self.end), fallback),
        }
    }

    #[must_use]
    pub fn announce<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Announcement {
        let event = self.next_event(now);

        Announcement {
            label: event.label(),
            ics_link: ICS_PATH,
            google_calendar_link: event.google_calendar_link(self),
            event,
        }
    }
}

impl NextEvent {
    /// e.g. `Thursday June 13th, 2019 @ 6:30pm`
    #[must_use]
    pub fn label(&self) -> String {
        let day = self.start.day();

        format!(
            "{} {}{}, {} @ {}",
            self.start.format("%A %B"),
            day,
            ordinal_suffix(day),
            self.start.year(),
            self.start.format("%-I:%M%P")
        )
    }
}

#[must_use]
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

// Wall-clock readings skipped by a DST jump keep the offset of the clock reading.
fn localize<Tz: TimeZone>(
    tz: &Tz,
    local: NaiveDateTime,
    fallback: FixedOffset,
) -> DateTime<FixedOffset> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(datetime) => datetime.fixed_offset(),
        LocalResult::Ambiguous(first, second) => first.min(second).fixed_offset(),
        LocalResult::None => DateTime::from_naive_utc_and_offset(local - fallback, fallback),
    }
}
