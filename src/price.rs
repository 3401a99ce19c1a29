//! Price-token grammar and denomination handling.
//!
//! A price token is `digits* ('.' digits*)? (denomination)?` with denomination
//! `p`, `pp`, or `k`, matched start to end. Amounts are platinum pieces; `k`
//! means thousands, and a bare decimal amount like `1.8` also reads as
//! thousands.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Splits a candidate token into (numeric portion, denomination suffix).
/// Returns `None` when the string does not match the grammar at all.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    match &s[i..] {
        suffix @ ("" | "p" | "pp" | "k") => Some((&s[..i], suffix)),
        _ => None,
    }
}

/// True iff `s` matches the price grammar. The empty string and a bare
/// denomination both match (they carry no numeric value yet).
pub fn is_price(s: &str) -> bool {
    split_token(s).is_some()
}

/// Parses a price token into platinum pieces.
///
/// Returns `None` when the numeric portion is empty, when the token does not
/// match the grammar, or when the amount overflows. Factor selection is
/// exclusive: an explicit denomination wins; a suffix-less amount with an
/// interior decimal point reads as thousands; anything else is taken as-is.
/// The result is `floor(amount * factor)`.
pub fn parse_price(s: &str) -> Option<u64> {
    let (amount, suffix) = split_token(s)?;
    if !amount.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let factor = match suffix {
        "p" | "pp" => 1u64,
        "k" => 1000,
        _ if amount.contains('.') && !amount.ends_with('.') => 1000,
        _ => 1,
    };
    let amount = amount.strip_suffix('.').unwrap_or(amount);
    let value: Decimal = if let Some(frac) = amount.strip_prefix('.') {
        format!("0.{}", frac).parse().ok()?
    } else {
        amount.parse().ok()?
    };
    let total = value.checked_mul(Decimal::from(factor))?;
    total.floor().to_u64()
}
