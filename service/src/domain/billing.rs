//! Billing [`Period`] definitions.

use std::fmt;

use strum::Display;

use super::{discount::Weeks, stay::Nights};

/// Number of nights in a billed week.
pub const DAYS_PER_WEEK: Nights = 7;

/// Minimal number of leftover days rounded up into a whole billed week.
///
/// Fewer leftover days are charged per night instead.
pub const ROUND_UP_DAYS: Nights = 4;

/// Number of whole weeks and leftover days of a stay, along with the
/// [`Rounding`] applied to the leftover days.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// Number of whole weeks in the stay.
    pub weeks: Weeks,

    /// Number of nights left after removing the whole weeks.
    pub days: Nights,

    /// [`Rounding`] applied to the leftover [`Period::days`].
    pub rounding: Rounding,
}

impl Period {
    /// Normalizes the provided number of `nights` into a billing [`Period`].
    #[must_use]
    pub fn from_nights(nights: Nights) -> Self {
        let weeks = nights / DAYS_PER_WEEK;
        let days = nights % DAYS_PER_WEEK;
        let rounding = if days >= ROUND_UP_DAYS {
            Rounding::Absorbed
        } else {
            Rounding::Surcharged
        };
        Self {
            weeks,
            days,
            rounding,
        }
    }

    /// Returns the number of nights in this [`Period`].
    #[must_use]
    pub fn nights(&self) -> Nights {
        self.weeks * DAYS_PER_WEEK + self.days
    }

    /// Returns the number of weeks the stay is charged for.
    #[must_use]
    pub fn billed_weeks(&self) -> Weeks {
        match self.rounding {
            Rounding::Absorbed => self.weeks + 1,
            Rounding::Surcharged => self.weeks,
        }
    }

    /// Returns the number of leftover nights charged per night.
    #[must_use]
    pub fn surcharged_days(&self) -> Nights {
        match self.rounding {
            Rounding::Absorbed => 0,
            Rounding::Surcharged => self.days,
        }
    }

    /// Indicates whether the leftover days were rounded up into an extra
    /// billed week.
    #[must_use]
    pub fn is_rounded_up(&self) -> bool {
        self.rounding == Rounding::Absorbed
    }
}

/// Human-readable note describing which [`Rounding`] was applied.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { weeks, days, .. } = self;
        write!(f, "{weeks} week(s) {days} day(s) -> ")?;
        match self.rounding {
            Rounding::Absorbed => {
                write!(f, "{} week(s) rate applied", self.billed_weeks())
            }
            Rounding::Surcharged => {
                write!(f, "weekly rate plus {days} extra night(s)")
            }
        }
    }
}

/// Way the leftover days of a [`Period`] are billed.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Rounding {
    /// Leftover days are folded into one more billed week.
    Absorbed,

    /// Leftover days are charged per night.
    Surcharged,
}
