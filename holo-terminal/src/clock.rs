//! Per-frame text: a fixed literal or the formatted local time
use std::borrow::Cow;
use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use holo_core::TextSource;
use log::warn;

/// Longest formatted time string kept, in bytes
pub const MAX_CLOCK_LEN: usize = 63;

/// Text to draw this frame
pub fn frame_text<'a, Tz>(source: &'a TextSource, now: &DateTime<Tz>) -> Cow<'a, str>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match source {
        TextSource::Literal(text) => Cow::Borrowed(text),
        TextSource::Clock { format } => Cow::Owned(format_time(now, format)),
    }
}

/// strftime-style formatting.
///
/// A format chrono cannot render gives an empty string. Output longer
/// than `MAX_CLOCK_LEN` bytes is cut at the last character boundary that fits.
pub fn format_time<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut text = String::new();
    if write!(text, "{}", now.format(format)).is_err() {
        warn!("cannot render time format {format:?}");
        return String::new();
    }
    if text.len() > MAX_CLOCK_LEN {
        let mut end = MAX_CLOCK_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}
