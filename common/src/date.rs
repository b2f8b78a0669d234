//! Calendar date utilities.

use std::{cmp::Ordering, fmt, hash, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::{format_description::FormatItem, macros::format_description};

/// Untyped calendar date.
pub type Date = DateOf;

/// Format of a [`Date`] in its string representation (`YYYY-MM-DD`).
const FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without any time-of-day component.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self::from)
    }

    /// Creates a new [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, FORMAT)
            .map(Self::from)
            .map_err(ParseError)
    }

    /// Returns the signed number of whole days elapsed since the `earlier`
    /// [`Date`].
    ///
    /// The result is negative if `earlier` is actually after this [`Date`].
    #[must_use]
    pub fn days_since<Other: ?Sized>(&self, earlier: &DateOf<Other>) -> i64 {
        (self.inner - earlier.inner).whole_days()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> hash::Hash for DateOf<Of> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.inner.format(FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn parse() {
        assert_eq!(
            date("2025-03-01"),
            Date::from_calendar_date(2025, 3, 1).unwrap(),
        );
        assert_eq!(
            date("2024-02-29"),
            Date::from_calendar_date(2024, 2, 29).unwrap(),
        );

        assert!(Date::parse("2025-02-29").is_err());
        assert!(Date::parse("2025-13-01").is_err());
        assert!(Date::parse("2025-3-1").is_err());
        assert!(Date::parse("01.03.2025").is_err());
        assert!(Date::parse("2025-03-01T10:00:00Z").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(date("2025-03-01").to_string(), "2025-03-01");
        assert_eq!(
            Date::from_calendar_date(987, 12, 31).unwrap().to_string(),
            "0987-12-31",
        );
    }

    #[test]
    fn days_since() {
        let check_in = date("2025-03-01");

        assert_eq!(date("2025-03-11").days_since(&check_in), 10);
        assert_eq!(date("2025-03-01").days_since(&check_in), 0);
        assert_eq!(date("2025-02-27").days_since(&check_in), -2);
        // Crosses a leap day.
        assert_eq!(date("2024-03-01").days_since(&date("2024-02-28")), 2);
    }
}
