use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// The document information dictionary: what a PDF viewer shows under "Properties"
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Left out of the PDF when [None], so the same document always serialises to the
    /// same bytes
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creation_date(&mut self, date: DateTime<FixedOffset>) -> &mut Self {
        self.creation_date = Some(date);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut dict = writer.document_info(refs.gen(RefType::Info));

        if let Some(title) = &self.title {
            dict.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            dict.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            dict.subject(TextStr(subject));
        }
        dict.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        if let Some(date) = &self.creation_date {
            dict.creation_date(pdf_date(date));
        }
    }
}

fn pdf_date(date: &DateTime<FixedOffset>) -> Date {
    let offset_minutes = date.offset().local_minus_utc() / 60;
    Date::new(date.year() as u16)
        .month(date.month() as u8)
        .day(date.day() as u8)
        .hour(date.hour() as u8)
        .minute(date.minute() as u8)
        .second(date.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_keep_their_utc_offset() {
        let date = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 9, 30, 15)
            .unwrap();

        let mut writer = Pdf::new();
        writer.document_info(pdf_writer::Ref::new(1)).creation_date(pdf_date(&date));
        let bytes = writer.finish();

        assert!(String::from_utf8_lossy(&bytes).contains("D:20250601093015+05"));
    }
}
