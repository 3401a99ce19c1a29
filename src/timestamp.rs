//! Log timestamps and client time offsets.
//!
//! Log lines carry client-local times with no timezone (`Jan 01 13:45:35
//! 2017`). Each upload also carries the client's current local time, so the
//! server derives a per-upload offset (server now minus client now) and adds
//! it to every log time. That keeps rows from differently skewed clients
//! comparable without collapsing everything to UTC.

use chrono::{NaiveDateTime, TimeDelta};

/// Timestamp format inside log lines, weekday already dropped by the splitter.
const LOG_FORMAT: &str = "%b %d %H:%M:%S %Y";

/// Client-now format sent alongside each upload.
const CLIENT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a log timestamp such as `Jan 01 13:45:35 2017`.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, LOG_FORMAT).ok()
}

/// Parses a log timestamp and shifts it into server time.
pub fn parse_timestamp_normalized(text: &str, offset: TimeDelta) -> Option<NaiveDateTime> {
    parse_timestamp(text).map(|t| t + offset)
}

/// Offset between server time and a client's reported local time
/// (`2017-01-02T14:00:30`). Add the offset to client times to get server
/// times.
pub fn client_time_offset(now: NaiveDateTime, client_time: &str) -> Option<TimeDelta> {
    let client = NaiveDateTime::parse_from_str(client_time, CLIENT_FORMAT).ok()?;
    Some(now - client)
}
