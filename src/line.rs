//! Log-line splitter.
//!
//! Extracts `(timestamp, speaker, message)` from one raw line of the fixed
//! shape `[<token> <timestamp>] <speaker> auctions, '<message>'`, e.g.
//! `[Sun Jan 01 13:45:35 2017] Toon auctions, 'WTS Ale'`. Total function:
//! a line that does not conform returns `None`, never an error.

/// The three extracted fields of a well-formed auction line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuctionLine {
    /// Timestamp text as written in the log, weekday token dropped.
    pub timestamp: String,
    pub speaker: String,
    pub message: String,
}

/// Splits one raw log line. `None` is the no-match sentinel for anything
/// that is not an auction line.
pub fn split_line(line: &str) -> Option<AuctionLine> {
    let rest = line.strip_prefix('[')?;
    // Weekday token: anything without a space, dropped.
    let (weekday, rest) = rest.split_once(' ')?;
    if weekday.is_empty() {
        return None;
    }
    let (timestamp, rest) = rest.split_once(']')?;
    if timestamp.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix(' ')?;
    let (speaker, rest) = rest.split_once(' ')?;
    if speaker.is_empty() {
        return None;
    }
    let message = rest.strip_prefix("auctions, '")?.strip_suffix('\'')?;
    if message.is_empty() {
        return None;
    }
    Some(AuctionLine {
        timestamp: timestamp.to_string(),
        speaker: speaker.to_string(),
        message: message.to_string(),
    })
}
