use ics::{
    escape_text,
    properties::{Description, DtEnd, DtStart, Location, RRule, Summary},
};

use crate::Schedule;

impl Schedule {
    /// The recurring invite served as a static file.
    ///
    /// Times are floating (no `TZID`), so every subscriber gets the meetup at
    /// the same wall-clock time in their own zone.
    #[must_use]
    pub fn to_ics(&self) -> ics::ICalendar<'_> {
        let date = self.first.format("%Y%m%d");
        let start = format!("{}T{}", date, self.start.format("%H%M%S"));
        let end = format!("{}T{}", date, self.end.format("%H%M%S"));

        let id = format!("{}_{}", start, self.title.replace(' ', "-"));
        let stamp = format!("{date}T000000Z");

        let mut ics_event = ics::Event::new(id, stamp);

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(escape_text(self.title.as_str())));
        ics_event.push(Description::new(escape_text(self.description.as_str())));
        ics_event.push(Location::new(escape_text(self.location.as_str())));
        ics_event.push(RRule::new(format!(
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY={}",
            self.day()
        )));

        let mut icalendar = ics::ICalendar::new("2.0", format!("-//{}//EN", self.title));
        icalendar.add_event(ics_event);

        icalendar
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn lines(schedule: &Schedule) -> Vec<String> {
        schedule
            .to_ics()
            .to_string()
            .split("\r\n")
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn default_invite_repeats_on_the_thirteenth() {
        let lines = lines(&Schedule::default());

        assert_eq!(lines.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
        assert!(lines.contains(&"BEGIN:VEVENT".to_string()));
        assert!(lines.contains(&"DTSTART:20190613T183000".to_string()));
        assert!(lines.contains(&"DTEND:20190613T203000".to_string()));
        assert!(lines.contains(&"SUMMARY:Overcommitters Club".to_string()));
        assert!(lines.contains(&"RRULE:FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=13".to_string()));
        assert!(lines.contains(&"UID:20190613T183000_Overcommitters-Club".to_string()));
    }

    #[test]
    fn description_commas_are_escaped() {
        let mut schedule = Schedule::default();
        schedule.description = "Chill out, answer emails".into();

        assert!(lines(&schedule).contains(&"DESCRIPTION:Chill out\\, answer emails".to_string()));
    }

    #[test]
    fn custom_schedule_anchors_on_first_occurrence() {
        let schedule = Schedule::new(
            NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(7, 45, 0).unwrap(),
        )
        .unwrap();
        let lines = lines(&schedule);

        assert!(lines.contains(&"DTSTART:20210201T070000".to_string()));
        assert!(lines.contains(&"DTEND:20210201T074500".to_string()));
        assert!(lines.contains(&"RRULE:FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1".to_string()));
    }
}
