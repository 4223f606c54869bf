use chrono::{Datelike, NaiveDate};

use super::error::BijakError;

/// First calendar year of the April–March fiscal year containing `date`.
///
/// A date in March 2025 belongs to fiscal year 2024-25; a date in
/// April 2025 starts 2025-26.
pub fn fiscal_year_start(date: NaiveDate) -> i32 {
    if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Label of the fiscal year containing `date`, e.g. "2024-25".
pub fn fiscal_year_label(date: NaiveDate) -> String {
    label_for(fiscal_year_start(date))
}

fn label_for(start_year: i32) -> String {
    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// Gapless invoice number sequence within a fiscal year.
///
/// Generates numbers in the format `{prefix}/{fiscal year}/{sequential}`,
/// e.g. "INV/2024-25/001", "INV/2024-25/002". GST invoices are numbered
/// consecutively within the April–March fiscal year; the counter resets
/// when the sequence advances to a new fiscal year.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    fy_start: i32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1 for the given fiscal year
    /// (named by its first calendar year, e.g. 2024 for 2024-25).
    pub fn new(prefix: impl Into<String>, fy_start: i32) -> Self {
        Self {
            prefix: prefix.into(),
            fy_start,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, fy_start: i32, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            fy_start,
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        self.format(num)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    fn format(&self, num: u64) -> String {
        format!(
            "{}/{}/{:0>width$}",
            self.prefix,
            label_for(self.fy_start),
            num,
            width = self.zero_pad
        )
    }

    /// First calendar year of the sequence's fiscal year.
    pub fn fiscal_year(&self) -> i32 {
        self.fy_start
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new fiscal year, resetting the counter to 1.
    pub fn advance_fiscal_year(&mut self, new_fy_start: i32) -> Result<(), BijakError> {
        if new_fy_start <= self.fy_start {
            return Err(BijakError::Numbering(format!(
                "new fiscal year {new_fy_start} must be greater than current {}",
                self.fy_start
            )));
        }
        self.fy_start = new_fy_start;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance if the given date falls in a later fiscal year.
    /// Returns true if the sequence advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let fy = fiscal_year_start(date);
        if fy > self.fy_start {
            self.fy_start = fy;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fiscal_year_boundaries() {
        assert_eq!(fiscal_year_start(date(2024, 4, 1)), 2024);
        assert_eq!(fiscal_year_start(date(2025, 3, 31)), 2024);
        assert_eq!(fiscal_year_start(date(2025, 4, 1)), 2025);
        assert_eq!(fiscal_year_label(date(2024, 6, 15)), "2024-25");
        assert_eq!(fiscal_year_label(date(2025, 1, 15)), "2024-25");
    }

    #[test]
    fn century_rollover_label() {
        assert_eq!(fiscal_year_label(date(2099, 6, 1)), "2099-00");
    }

    #[test]
    fn sequential_numbering() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024);
        assert_eq!(seq.next_number(), "INV/2024-25/001");
        assert_eq!(seq.next_number(), "INV/2024-25/002");
        assert_eq!(seq.next_number(), "INV/2024-25/003");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024);
        assert_eq!(seq.peek(), "INV/2024-25/001");
        assert_eq!(seq.peek(), "INV/2024-25/001");
        assert_eq!(seq.next_number(), "INV/2024-25/001");
        assert_eq!(seq.peek(), "INV/2024-25/002");
    }

    #[test]
    fn starting_at() {
        let mut seq = InvoiceNumberSequence::starting_at("BILL", 2024, 42);
        assert_eq!(seq.next_number(), "BILL/2024-25/042");
        assert_eq!(seq.next_number(), "BILL/2024-25/043");
    }

    #[test]
    fn custom_padding() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024).with_padding(5);
        assert_eq!(seq.next_number(), "INV/2024-25/00001");
    }

    #[test]
    fn fiscal_year_advance() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024);
        seq.next_number();
        seq.next_number();
        seq.advance_fiscal_year(2025).unwrap();
        assert_eq!(seq.next_number(), "INV/2025-26/001");
    }

    #[test]
    fn fiscal_year_advance_rejects_past() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024);
        assert!(seq.advance_fiscal_year(2023).is_err());
        assert!(seq.advance_fiscal_year(2024).is_err());
    }

    #[test]
    fn auto_advance_on_april() {
        let mut seq = InvoiceNumberSequence::new("INV", 2024);
        seq.next_number();

        // March is still fiscal 2024-25
        assert!(!seq.auto_advance(date(2025, 3, 31)));
        assert_eq!(seq.next_number(), "INV/2024-25/002");

        assert!(seq.auto_advance(date(2025, 4, 1)));
        assert_eq!(seq.next_number(), "INV/2025-26/001");
    }
}
