use std::fmt;
use std::str::FromStr;

use crate::ClockError;

/// Wall-clock instant with one-second resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeValue {
    pub const MIDNIGHT: TimeValue = TimeValue { hour: 0, minute: 0, second: 0 };

    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::OutOfRange { hour, minute, second });
        }

        Ok(Self { hour: hour as u8, minute: minute as u8, second: second as u8 })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }

    /// Hour on a 12-hour dial: 0 becomes 12, 13-23 become 1-11.
    pub fn hour12(&self) -> u32 {
        (self.hour() + 11) % 12 + 1
    }

    /// Formats as `HH:MM` or `HH:MM:SS`, every field zero-padded to two digits.
    pub fn format(&self, use_24_hour: bool, show_seconds: bool) -> String {
        let hour = if use_24_hour { self.hour() } else { self.hour12() };
        if show_seconds {
            format!("{:02}:{:02}:{:02}", hour, self.minute, self.second)
        } else {
            format!("{:02}:{:02}", hour, self.minute)
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeValue {
    type Err = ClockError;

    /// Parses `HH:MM` or `HH:MM:SS`. Seconds default to zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse_error = || ClockError::Parse(text.to_owned());

        let mut parts = [0u32; 3];
        let mut count = 0;
        for field in text.trim().split(':') {
            if count == parts.len() || field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(parse_error());
            }
            parts[count] = field.parse().map_err(|_| parse_error())?;
            count += 1;
        }

        if count < 2 {
            return Err(parse_error());
        }

        TimeValue::new(parts[0], parts[1], parts[2])
    }
}
