use serde::{Deserialize, Serialize};

/// A calendar month expressed as an "MM/YYYY" form token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: u8,
    pub year: i32,
}

impl Period {
    /// Parse a period token of the shape `M/YYYY` or `MM/YYYY`.
    ///
    /// Malformed tokens (wrong digit counts, month outside 1-12, trailing
    /// garbage) yield `None` rather than an error so that a bad schedule
    /// field never aborts evaluation of the rest of the record.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (month_part, year_part) = token.split_once('/')?;
        if month_part.is_empty() || month_part.len() > 2 || year_part.len() != 4 {
            return None;
        }
        if !month_part.bytes().all(|b| b.is_ascii_digit())
            || !year_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let month = month_part.parse::<u8>().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        let year = year_part.parse::<i32>().ok()?;

        Some(Self { month, year })
    }

    /// Signed month count from `self` to `end`. Negative when `end` is
    /// earlier, zero when both fall in the same month.
    pub fn months_until(&self, end: &Period) -> i32 {
        (end.year - self.year) * 12 + (i32::from(end.month) - i32::from(self.month))
    }
}

/// Signed month count between two period tokens, or 0 when either token
/// fails to parse. Callers treat non-positive spans as an invalid schedule.
pub fn month_span(start: &str, end: &str) -> i32 {
    match (Period::parse(start), Period::parse(end)) {
        (Some(start), Some(end)) => start.months_until(&end),
        _ => 0,
    }
}
