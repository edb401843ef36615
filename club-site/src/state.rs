use chrono::{DateTime, Local, TimeZone};
use club_calendar::{Announcement, Schedule};

use crate::page::{Page, PageError};

/// Reads the current time in the zone the meetup is announced in.
pub type Clock<Tz> = fn() -> DateTime<Tz>;

/// Immutable after startup; shared by every request.
pub struct AppState<Tz: TimeZone = Local> {
    pub schedule: Schedule,
    pub ics: String,
    page: Page,
    clock: Clock<Tz>,
}

impl<Tz: TimeZone> AppState<Tz> {
    pub fn new(schedule: Schedule, clock: Clock<Tz>) -> Result<Self, PageError> {
        let ics = schedule.to_ics().to_string();

        Ok(Self {
            schedule,
            ics,
            page: Page::new()?,
            clock,
        })
    }

    pub fn announce(&self) -> Announcement {
        self.schedule.announce(&(self.clock)())
    }

    pub fn render_page(&self) -> Result<String, PageError> {
        self.page.render(&self.schedule, &self.announce())
    }
}
