// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use crate::core::error::CommandError;

/// How a command's magnitude relates to the current brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Replace the current brightness.
    Absolute,
    /// Written with a leading `+`.
    Plus,
    /// Written with a leading `-`. The magnitude already carries the sign.
    Minus,
}

/// A parsed brightness command such as `50`, `+10` or `-5%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessCommand {
    pub magnitude: i64,
    pub sign: Sign,
    /// Magnitude is a percentage of the maximum brightness.
    pub percent: bool,
}

impl BrightnessCommand {
    pub fn is_relative(&self) -> bool {
        matches!(self.sign, Sign::Plus | Sign::Minus)
    }
}

/// Parses a brightness command.
///
/// The sign is only taken from the very first character, while the integer
/// scan skips leading whitespace first, so `" +5"` is an absolute command.
/// A `%` directly after the digits marks a percentage; anything else after
/// the digits is ignored.
pub fn parse(input: &str) -> Result<BrightnessCommand, CommandError> {
    let invalid = || CommandError::Invalid(input.to_string());

    let sign = match input.as_bytes().first() {
        Some(b'+') => Sign::Plus,
        Some(b'-') => Sign::Minus,
        _ => Sign::Absolute,
    };

    // same set as C isspace(), which includes vertical tab
    let body = input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let digits_start = usize::from(body.starts_with(['+', '-']));
    let digits = body[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return Err(invalid());
    }

    let end = digits_start + digits;
    let magnitude: i64 = body[..end].parse().map_err(|_| invalid())?;
    let percent = body[end..].starts_with('%');

    Ok(BrightnessCommand { magnitude, sign, percent })
}

impl FromStr for BrightnessCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for BrightnessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Absolute => write!(f, "{}", self.magnitude)?,
            Sign::Plus => write!(f, "+{}", self.magnitude)?,
            Sign::Minus => write!(f, "-{}", self.magnitude.unsigned_abs())?,
        }
        if self.percent {
            write!(f, "%")?;
        }
        Ok(())
    }
}
