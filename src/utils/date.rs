//! Post dates from frontmatter.
//!
//! Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SSZ`. Field order makes the
//! derived `Ord` chronological, which is all the archive sort needs.

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};
use std::fmt;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC date with optional time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl PostDate {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[cfg(test)]
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            bail!("expected YYYY-MM-DD, got `{s}`");
        }

        let (Some(year), Some(month), Some(day)) = (
            parse_u16(&bytes[0..4]),
            parse_u8(&bytes[5..7]),
            parse_u8(&bytes[8..10]),
        ) else {
            bail!("expected YYYY-MM-DD, got `{s}`");
        };

        let (hour, minute, second) = match bytes.len() {
            10 => (0, 0, 0),
            20 if bytes[10] == b'T' && bytes[13] == b':' && bytes[16] == b':' && bytes[19] == b'Z' => {
                match (
                    parse_u8(&bytes[11..13]),
                    parse_u8(&bytes[14..16]),
                    parse_u8(&bytes[17..19]),
                ) {
                    (Some(h), Some(m), Some(sec)) => (h, m, sec),
                    _ => bail!("invalid time in `{s}`"),
                }
            }
            _ => bail!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ, got `{s}`"),
        };

        let date = Self::new(year, month, day, hour, minute, second);
        date.validate()?;
        Ok(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    const fn has_time(&self) -> bool {
        self.hour != 0 || self.minute != 0 || self.second != 0
    }

    /// Listing format, e.g. "March 01, 2023"
    pub fn to_long_format(self) -> String {
        format!(
            "{} {:02}, {:04}",
            MONTHS[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.has_time() {
            write!(f, "T{:02}:{:02}:{:02}Z", self.hour, self.minute, self.second)?;
        }
        Ok(())
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}
