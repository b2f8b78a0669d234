//! [`RateCard`] definitions.

use common::Money;
use smart_default::SmartDefault;

use super::{billing::Period, discount, room_type, Quote, RoomType};

/// Prices every [`Quote`] is computed with.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct RateCard {
    /// Available [`RoomType`]s.
    pub room_types: room_type::Catalog,

    /// Volume discounts of the weekly base rate.
    pub discounts: discount::Table,

    /// One-time cleaning fee added to every [`Quote`].
    #[default(Money::from(50_000_u32))]
    pub cleaning_fee: Money,

    /// Refundable deposit reported along with every [`Quote`].
    #[default(Money::from(330_000_u32))]
    pub deposit: Money,
}

impl RateCard {
    /// Computes the itemized [`Quote`] of the provided billing [`Period`] in
    /// the provided [`RoomType`].
    ///
    /// The discount applies to the weekly base rate only.
    #[must_use]
    pub fn quote(&self, room_type: &RoomType, period: Period) -> Quote {
        let weeks = period.billed_weeks();
        let discount = self.discounts.rate_for(weeks);

        let weekly_rate = room_type.base_rate.discounted(discount);
        let surcharge = room_type.extra_night * period.surcharged_days();
        let stay_cost = weekly_rate * weeks + surcharge;
        let maintenance_cost = room_type.maintenance * weeks;

        Quote {
            room_type_id: room_type.id.clone(),
            period,
            base_rate: room_type.base_rate,
            extra_night: room_type.extra_night,
            maintenance: room_type.maintenance,
            discount,
            weekly_rate,
            surcharge,
            stay_cost,
            maintenance_cost,
            cleaning_fee: self.cleaning_fee,
            deposit: self.deposit,
            total: stay_cost + maintenance_cost + self.cleaning_fee,
        }
    }
}
