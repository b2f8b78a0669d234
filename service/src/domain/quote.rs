//! [`Quote`] definitions.

use common::{Money, Percent};

use super::{billing::Period, room_type};

/// Itemized price of a stay.
///
/// Computed on demand and never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// ID of the quoted [`RoomType`].
    ///
    /// [`RoomType`]: super::RoomType
    pub room_type_id: room_type::Id,

    /// Billing [`Period`] of the stay.
    pub period: Period,

    /// Weekly base rate of the quoted [`RoomType`] before the discount.
    ///
    /// [`RoomType`]: super::RoomType
    pub base_rate: Money,

    /// Per-night price of the leftover days of the quoted [`RoomType`].
    ///
    /// [`RoomType`]: super::RoomType
    pub extra_night: Money,

    /// Weekly maintenance fee of the quoted [`RoomType`].
    ///
    /// [`RoomType`]: super::RoomType
    pub maintenance: Money,

    /// Volume discount applied to the weekly base rate.
    pub discount: Percent,

    /// Weekly base rate after the discount.
    pub weekly_rate: Money,

    /// Price of the leftover nights which weren't rounded into a week.
    pub surcharge: Money,

    /// Price of the stay itself: discounted weeks plus the [`surcharge`].
    ///
    /// [`surcharge`]: Quote::surcharge
    pub stay_cost: Money,

    /// Maintenance fee for every billed week.
    pub maintenance_cost: Money,

    /// One-time cleaning fee.
    pub cleaning_fee: Money,

    /// Refundable deposit, not included into the [`total`].
    ///
    /// [`total`]: Quote::total
    pub deposit: Money,

    /// Sum of the [`stay_cost`], [`maintenance_cost`] and [`cleaning_fee`].
    ///
    /// [`stay_cost`]: Quote::stay_cost
    /// [`maintenance_cost`]: Quote::maintenance_cost
    /// [`cleaning_fee`]: Quote::cleaning_fee
    pub total: Money,
}

impl Quote {
    /// Returns the number of weeks this [`Quote`] charges for.
    #[must_use]
    pub fn billed_weeks(&self) -> u32 {
        self.period.billed_weeks()
    }

    /// Indicates whether leftover days were rounded up into an extra week.
    #[must_use]
    pub fn is_rounded_up(&self) -> bool {
        self.period.is_rounded_up()
    }

    /// Returns the line describing how the [`Quote::total`] was composed.
    #[must_use]
    pub fn detail(&self) -> String {
        let weeks = self.billed_weeks();
        let mut detail = format!(
            "({} x {weeks} week(s), {}% off)",
            self.base_rate, self.discount,
        );
        if !self.is_rounded_up() {
            detail.push_str(&format!(
                " + extra nights ({} x {} day(s))",
                self.extra_night, self.period.days,
            ));
        }
        detail.push_str(&format!(
            " + maintenance ({} x {weeks} week(s)) + cleaning {}",
            self.maintenance, self.cleaning_fee,
        ));
        detail
    }
}
