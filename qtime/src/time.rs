//! Wall-clock helpers.

use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};

/// Layout of C's `ctime`, e.g. `"Wed Jun 30 21:49:08 1993\n"`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y\n";

/// Seconds since the Unix epoch, truncated to whole seconds.
pub fn unix_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as f64
}

/// The current local time in `ctime` layout, trailing newline included.
pub fn date_time_str() -> String {
    ctime_format(&Local::now())
}

pub fn ctime_format<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(CTIME_FORMAT).to_string()
}
