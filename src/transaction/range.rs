//! Date-range filtering for the dashboard.

use time::{
    Date, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{Error, transaction::Transaction};

const ISO_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// An inclusive range of calendar dates.
///
/// Each bound is compared as midnight UTC of that day, so a transaction later
/// in the day than `end` falls outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day in the range.
    pub start: Date,
    /// The last day in the range.
    pub end: Date,
}

impl DateRange {
    /// Create a range from the two bounds chosen by the user.
    ///
    /// # Errors
    /// Returns [Error::MissingDateBound] if either bound is `None`.
    pub fn from_bounds(start: Option<Date>, end: Option<Date>) -> Result<Self, Error> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(Error::MissingDateBound),
        }
    }

    /// Whether `date` lies within the range, bounds included.
    pub fn contains(&self, date: OffsetDateTime) -> bool {
        start_of_day(self.start) <= date && date <= start_of_day(self.end)
    }
}

/// Get the transactions dated within `range`, keeping their order.
///
/// If `range.start` is after `range.end` the result is empty.
pub fn filter_transactions(transactions: &[Transaction], range: DateRange) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date))
        .cloned()
        .collect()
}

/// Parse a `YYYY-MM-DD` date as sent by a date input.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid ISO calendar date.
pub fn parse_iso_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), ISO_DATE_FORMAT).map_err(|error| {
        tracing::debug!("could not parse date {text:?}: {error}");
        Error::InvalidDate(text.to_owned())
    })
}

/// Format the UTC calendar date of `date` as `YYYY-MM-DD`.
pub fn format_iso_date(date: OffsetDateTime) -> String {
    format_date(date.to_offset(UtcOffset::UTC).date())
}

/// Format `date` as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}


#[cfg(test)]
mod bounds_tests {
    use time::macros::{date, datetime};

    use crate::{
        Error,
        transaction::range::{DateRange, format_iso_date, parse_iso_date},
    };

    #[test]
    fn from_bounds_requires_both_dates() {
        let day = Some(date!(2020 - 10 - 14));

        assert_eq!(
            DateRange::from_bounds(day, day),
            Ok(DateRange {
                start: date!(2020 - 10 - 14),
                end: date!(2020 - 10 - 14)
            })
        );
        assert_eq!(
            DateRange::from_bounds(None, day),
            Err(Error::MissingDateBound)
        );
        assert_eq!(
            DateRange::from_bounds(day, None),
            Err(Error::MissingDateBound)
        );
        assert_eq!(
            DateRange::from_bounds(None, None),
            Err(Error::MissingDateBound)
        );
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_iso_date("2019-01-01"), Ok(date!(2019 - 01 - 01)));
        assert_eq!(parse_iso_date(" 2020-12-31 "), Ok(date!(2020 - 12 - 31)));
    }

    #[test]
    fn rejects_invalid_dates() {
        for text in ["", "2020-13-01", "2021-02-29", "14/10/2020", "yesterday"] {
            assert_eq!(
                parse_iso_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "parsing {text:?}"
            );
        }
    }

    #[test]
    fn formats_utc_date() {
        assert_eq!(format_iso_date(datetime!(2018-10-14 0:00 UTC)), "2018-10-14");
        assert_eq!(format_iso_date(datetime!(2024-02-29 23:59 UTC)), "2024-02-29");
        // The calendar day is taken in UTC.
        assert_eq!(format_iso_date(datetime!(2024-03-01 1:00 +02:00)), "2024-02-29");
    }
}
