/*!
 * PID Token Parser
 * Base-10 signed integer parsing with host string-to-long rules
 */

use thiserror::Error;

use crate::core::types::QueryPid;

/// Why a written token was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty token")]
    Empty,

    #[error("invalid character at byte {0}")]
    InvalidDigit(usize),

    #[error("value out of range")]
    Overflow,

    #[error("negative pid {0}")]
    Negative(i64),
}

/// Parse a written token into a non-negative identifier
///
/// Accepts an optional leading `+` or `-`, one or more ASCII digits, and a
/// single trailing newline. Anything else, including surrounding whitespace,
/// is rejected. The value must fit in an `i64`.
pub fn parse_pid(token: &[u8]) -> Result<QueryPid, ParseError> {
    let token = token.strip_suffix(b"\n").unwrap_or(token);

    let (negative, digits, offset) = match token.first() {
        Some(b'-') => (true, &token[1..], 1),
        Some(b'+') => (false, &token[1..], 1),
        _ => (false, token, 0),
    };
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut magnitude: u64 = 0;
    for (i, &b) in digits.iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit(offset + i));
        }
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .ok_or(ParseError::Overflow)?;
    }

    if negative {
        if magnitude == 0 {
            return Ok(0);
        }
        // i64::MIN has no positive counterpart
        if magnitude > i64::MAX as u64 + 1 {
            return Err(ParseError::Overflow);
        }
        let value = (magnitude as i64).wrapping_neg();
        return Err(ParseError::Negative(value));
    }

    if magnitude > i64::MAX as u64 {
        return Err(ParseError::Overflow);
    }
    Ok(magnitude)
}
