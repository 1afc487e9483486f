use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, TimeZone};
use tabwriter::{Alignment, IntoInnerError, TabWriter};

use crate::http_probe::prelude::ProbeRecord;

pub const HEADER_ROW: &str = "Time\tCount\tUrl\tResult\tTime\tHeaders";
pub const HEADER_RULE: &str = "-----\t-----\t---\t------\t----\t-------";

/// Column-aligned, buffered sink for probe rows.
///
/// Nothing reaches the underlying writer until [`RowWriter::flush`]; each
/// flush aligns the rows buffered since the previous one.
pub struct RowWriter<W: Write> {
    inner: TabWriter<W>,
}

impl<W: Write> RowWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: TabWriter::new(writer)
                .minwidth(0)
                .padding(1)
                .alignment(Alignment::Right),
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.inner, "{HEADER_ROW}")?;
        writeln!(self.inner, "{HEADER_RULE}")
    }

    pub fn write_row<Tz>(
        &mut self,
        count: u64,
        url: &str,
        record: &ProbeRecord,
        now: &DateTime<Tz>,
    ) -> io::Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        writeln!(self.inner, "{}", format_row(count, url, record, now))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> Result<W, IntoInnerError<TabWriter<W>>> {
        self.inner.into_inner()
    }
}

/// Tab separated cells for one probe, without the trailing newline.
pub fn format_row<Tz>(count: u64, url: &str, record: &ProbeRecord, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "[{}]\t[{}]\t[{}]\t[{}]\t[{}ms]\t[{}]",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        count,
        url,
        record.status_line,
        record.latency_ms,
        render_headers(&record.headers),
    )
}

/// The line printed once the operator stops the pinger.
pub fn format_summary(total: u64) -> String {
    format!("Total Requests: {total}")
}

/// A lone header renders as ` name:value `; several render as ` {name:value} ` each.
pub fn render_headers(headers: &[(String, String)]) -> String {
    match headers {
        [] => String::new(),
        [(name, value)] => format!(" {name}:{value} "),
        many => many
            .iter()
            .map(|(name, value)| format!(" {{{name}:{value}}} "))
            .collect(),
    }
}
