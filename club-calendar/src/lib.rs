mod links;
mod next_event;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use links::{GOOGLE_CALENDAR_URL, ICS_PATH};
pub use next_event::ordinal_suffix;
pub use structs::{Announcement, NextEvent, Schedule, ScheduleError};
