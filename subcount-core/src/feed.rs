//! Subscriber count feed
//!
//! The counter has no network stack of its own. A companion script on the
//! host polls the channel statistics and writes the count over the USB
//! serial port as one decimal number per line:
//!
//! ```text
//! 12345\n
//! 1,234,567\r\n
//! ```
//!
//! `,` and `_` separators are ignored, `\r` is dropped and blank lines are
//! skipped.

use heapless::Vec;

/// Longest line accepted, separators included
pub const MAX_LINE_LEN: usize = 32;

/// Errors that can occur while parsing the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedError {
    /// Line contains something other than digits and separators
    InvalidDigit,
    /// Count does not fit in a u32
    Overflow,
    /// Line exceeds `MAX_LINE_LEN`; the rest of it is discarded
    LineTooLong,
}

/// Byte-at-a-time line parser for the count feed
#[derive(Debug, Clone, Default)]
pub struct CountParser {
    line: Vec<u8, MAX_LINE_LEN>,
    discarding: bool,
}

impl CountParser {
    /// Create an empty parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte
    ///
    /// Returns `Ok(Some(count))` when a newline completes a valid line.
    /// An over-long line reports `LineTooLong` once and is then skipped up
    /// to its newline.
    pub fn feed(&mut self, byte: u8) -> Result<Option<u32>, FeedError> {
        match byte {
            b'\r' => Ok(None),
            b'\n' => {
                let line = core::mem::take(&mut self.line);
                if core::mem::replace(&mut self.discarding, false) {
                    return Ok(None);
                }
                parse_count(&line)
            }
            _ if self.discarding => Ok(None),
            _ => {
                if self.line.push(byte).is_err() {
                    self.line.clear();
                    self.discarding = true;
                    return Err(FeedError::LineTooLong);
                }
                Ok(None)
            }
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.line.clear();
        self.discarding = false;
    }
}

/// Parse one feed line (without its newline)
///
/// Blank lines give `Ok(None)`.
pub fn parse_count(line: &[u8]) -> Result<Option<u32>, FeedError> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Ok(None);
    }

    let mut count: u32 = 0;
    let mut digits = 0;
    for &byte in line {
        match byte {
            b'0'..=b'9' => {
                count = count
                    .checked_mul(10)
                    .and_then(|c| c.checked_add(u32::from(byte - b'0')))
                    .ok_or(FeedError::Overflow)?;
                digits += 1;
            }
            b',' | b'_' => {}
            _ => return Err(FeedError::InvalidDigit),
        }
    }

    if digits == 0 {
        return Err(FeedError::InvalidDigit);
    }
    Ok(Some(count))
}
