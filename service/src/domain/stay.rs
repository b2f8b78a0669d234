//! [`Stay`] definitions.

use common::{unit, DateOf};

#[cfg(doc)]
use common::Date;

use super::room_type;

/// Number of nights of a [`Stay`].
pub type Nights = u32;

/// Requested stay in a [`RoomType`].
///
/// [`RoomType`]: super::RoomType
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stay {
    /// ID of the requested [`RoomType`].
    ///
    /// [`RoomType`]: super::RoomType
    pub room_type_id: room_type::Id,

    /// [`Date`] of the check-in.
    pub check_in: CheckInDate,

    /// [`Date`] of the check-out.
    pub check_out: CheckOutDate,
}

impl Stay {
    /// Resolves the number of [`Nights`] between check-in and check-out.
    ///
    /// A check-out on or before the check-in day gives zero [`Nights`]
    /// rather than an error.
    #[must_use]
    pub fn nights(&self) -> Nights {
        let days = self.check_out.days_since(&self.check_in).max(0);
        Nights::try_from(days).unwrap_or(Nights::MAX)
    }
}

/// [`Date`] when a [`Stay`] begins.
pub type CheckInDate = DateOf<(Stay, unit::CheckIn)>;

/// [`Date`] when a [`Stay`] ends.
pub type CheckOutDate = DateOf<(Stay, unit::CheckOut)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::domain::room_type;

    use super::Stay;

    fn stay(check_in: &str, check_out: &str) -> Stay {
        Stay {
            room_type_id: room_type::Id::new("oneRoom").unwrap(),
            check_in: Date::parse(check_in).unwrap().coerce(),
            check_out: Date::parse(check_out).unwrap().coerce(),
        }
    }

    #[test]
    fn counts_whole_nights() {
        assert_eq!(stay("2025-03-01", "2025-03-02").nights(), 1);
        assert_eq!(stay("2025-03-01", "2025-03-11").nights(), 10);
        assert_eq!(stay("2025-03-01", "2025-04-12").nights(), 42);
    }

    #[test]
    fn spans_month_year_and_leap_day() {
        assert_eq!(stay("2024-02-27", "2024-03-02").nights(), 4);
        assert_eq!(stay("2025-02-27", "2025-03-02").nights(), 3);
        assert_eq!(stay("2025-12-29", "2026-01-05").nights(), 7);
    }

    #[test]
    fn same_day_is_zero_nights() {
        assert_eq!(stay("2025-03-01", "2025-03-01").nights(), 0);
    }

    #[test]
    fn inverted_range_is_zero_nights() {
        assert_eq!(stay("2025-03-11", "2025-03-01").nights(), 0);
        assert_eq!(stay("2026-01-01", "2025-01-01").nights(), 0);
    }
}
