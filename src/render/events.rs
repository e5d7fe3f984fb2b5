//! Event listing (`date,title,color`) for an external calendar widget.

use std::io;

use anyhow::Result;
use csv::Writer;

use crate::calendar::CalendarEvent;

pub fn write_events<W: io::Write>(out: W, events: &[CalendarEvent]) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    for ev in events {
        wtr.serialize(ev)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_schedule;
    use crate::request::ScheduleRequest;

    #[test]
    fn one_row_per_day_with_header() {
        let req = ScheduleRequest::new("", 2024, 2, "X".repeat(29)).unwrap();
        let events = build_schedule(&req).unwrap();
        let mut buf = Vec::new();
        write_events(&mut buf, &events).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "date,title,color");
        assert_eq!(lines[1], "2024-02-01,OFF,#F87171");
        assert_eq!(lines[29], "2024-02-29,OFF,#F87171");
    }
}
