//! Volume discount definitions.

use common::Percent;
use derive_more::{Display, Error};
use rust_decimal::Decimal;

/// Number of billed weeks.
pub type Weeks = u32;

/// Discount applied to the weekly base rate once a stay reaches
/// [`Tier::min_weeks`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tier {
    /// Inclusive threshold of billed weeks.
    pub min_weeks: Weeks,

    /// Discount [`Percent`] of this [`Tier`].
    pub rate: Percent,
}

/// Volume discount [`Tier`]s, ordered by descending [`Tier::min_weeks`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table(Vec<Tier>);

impl Table {
    /// Creates a new [`Table`] out of the provided [`Tier`]s in any order.
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - several [`Tier`]s have the same [`Tier::min_weeks`];
    /// - a [`Tier::rate`] is a 100% discount.
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Result<Self, TableError> {
        let mut tiers = tiers.into_iter().collect::<Vec<_>>();
        tiers.sort_by(|a, b| b.min_weeks.cmp(&a.min_weeks));

        if let Some(t) = tiers.iter().find(|t| t.rate.fraction() >= Decimal::ONE) {
            return Err(TableError::FullDiscount(t.min_weeks));
        }
        if let Some(w) = tiers.windows(2).find(|w| w[0].min_weeks == w[1].min_weeks)
        {
            return Err(TableError::DuplicateThreshold(w[0].min_weeks));
        }

        Ok(Self(tiers))
    }

    /// Returns the discount [`Percent`] for the provided number of billed
    /// `weeks`.
    ///
    /// The [`Tier`] with the highest satisfied threshold wins. [`Percent::ZERO`]
    /// is returned if no threshold is reached.
    #[must_use]
    pub fn rate_for(&self, weeks: Weeks) -> Percent {
        self.0
            .iter()
            .find(|t| weeks >= t.min_weeks)
            .map_or(Percent::ZERO, |t| t.rate)
    }

    /// Iterates over [`Tier`]s of this [`Table`] by descending threshold.
    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.0.iter()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self(
            [(6, 25_u8), (5, 20), (4, 15), (3, 10), (2, 5)]
                .into_iter()
                .filter_map(|(min_weeks, rate)| {
                    Some(Tier {
                        min_weeks,
                        rate: Percent::try_from(rate).ok()?,
                    })
                })
                .collect(),
        )
    }
}

/// Error of building a discount [`Table`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum TableError {
    /// Several [`Tier`]s share the same threshold.
    #[display("discount `Tier` for {_0} week(s) is defined more than once")]
    DuplicateThreshold(#[error(not(source))] Weeks),

    /// [`Tier`] discounts the whole weekly rate.
    #[display("discount `Tier` for {_0} week(s) must be below 100%")]
    FullDiscount(#[error(not(source))] Weeks),
}

#[cfg(test)]
mod spec {
    use common::Percent;

    use super::{Table, TableError, Tier};

    fn tier(min_weeks: u32, rate: u8) -> Tier {
        Tier {
            min_weeks,
            rate: Percent::try_from(rate).unwrap(),
        }
    }

    fn percent(rate: u8) -> Percent {
        Percent::try_from(rate).unwrap()
    }

    #[test]
    fn default_rates_by_billed_weeks() {
        let table = Table::default();

        let rates = (0..=7).map(|w| table.rate_for(w)).collect::<Vec<_>>();

        assert_eq!(rates, [0, 0, 5, 10, 15, 20, 25, 25].map(percent));
        assert_eq!(table.rate_for(52), percent(25));
    }

    #[test]
    fn picks_highest_satisfied_threshold_regardless_of_input_order() {
        let table =
            Table::new([tier(2, 5), tier(4, 15), tier(3, 10), tier(6, 25)])
                .unwrap();

        assert_eq!(
            table.iter().map(|t| t.min_weeks).collect::<Vec<_>>(),
            [6, 4, 3, 2],
        );
        assert_eq!(table.rate_for(1), Percent::ZERO);
        assert_eq!(table.rate_for(2), percent(5));
        assert_eq!(table.rate_for(5), percent(15));
        assert_eq!(table.rate_for(6), percent(25));
    }

    #[test]
    fn empty_table_never_discounts() {
        let table = Table::new([]).unwrap();

        assert_eq!(table.rate_for(0), Percent::ZERO);
        assert_eq!(table.rate_for(100), Percent::ZERO);
    }

    #[test]
    fn zero_threshold_applies_to_any_stay() {
        let table = Table::new([tier(0, 3), tier(4, 10)]).unwrap();

        assert_eq!(table.rate_for(0), percent(3));
        assert_eq!(table.rate_for(3), percent(3));
        assert_eq!(table.rate_for(4), percent(10));
    }

    #[test]
    fn rejects_invalid_tiers() {
        assert!(matches!(
            Table::new([tier(2, 5), tier(3, 10), tier(2, 7)]),
            Err(TableError::DuplicateThreshold(2)),
        ));
        assert!(matches!(
            Table::new([tier(2, 5), tier(8, 100)]),
            Err(TableError::FullDiscount(8)),
        ));
    }
}
