use chrono::{DateTime, FixedOffset, Utc};

use crate::{NextEvent, Schedule};

/// Where the pre-built invite is served.
pub const ICS_PATH: &str = "/static/overcommitters-club.ics";

pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Google's `recur` parameter wants the rule with its `RRULE:` property name.
const MONTHLY: &str = "RRULE:FREQ=MONTHLY;INTERVAL=1";

impl NextEvent {
    /// Link that opens Google Calendar's "create event" form prefilled with a monthly series.
    #[must_use]
    pub fn google_calendar_link(&self, schedule: &Schedule) -> String {
        let dates = format!("{}/{}", utc_stamp(&self.start), utc_stamp(&self.end));

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("action", "TEMPLATE")
            .append_pair("dates", &dates)
            .append_pair("text", &schedule.title)
            .append_pair("location", &schedule.location)
            .append_pair("details", &schedule.description)
            .append_pair("recur", MONTHLY)
            .finish();

        format!("{GOOGLE_CALENDAR_URL}?{query}")
    }
}

fn utc_stamp(datetime: &DateTime<FixedOffset>) -> String {
    datetime.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string()
}
