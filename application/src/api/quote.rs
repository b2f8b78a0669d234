//! [`Quote`]-related definitions.

use common::{Money, Percent};
use derive_more::From;
use juniper::{graphql_object, GraphQLEnum};
use service::{domain, query, Query as _};

use crate::{api, error::RoomTypeError, AsError, Context, Error};

/// Itemized price of a stay.
#[derive(Clone, Debug, From)]
pub struct Quote(domain::Quote);

impl Quote {
    /// Converts the provided count into a GraphQL `Int`.
    fn int(count: u32) -> Result<i32, Error> {
        i32::try_from(count).map_err(AsError::into_error)
    }
}

/// Itemized price of a stay.
///
/// `total` is `stayCost + maintenanceCost + cleaningFee`, while the `deposit`
/// is reported separately and never included.
#[graphql_object(context = Context)]
impl Quote {
    /// Quoted `RoomType`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_TYPE_NOT_EXISTS` - the quoted `RoomType` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Quote.roomType",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn room_type(&self, ctx: &Context) -> Result<api::RoomType, Error> {
        ctx.service()
            .execute(query::room_type::ById::by(self.0.room_type_id.clone()))
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| RoomTypeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Number of nights between the check-in and the check-out.
    ///
    /// Zero if the check-out is not after the check-in.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.nights", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn nights(&self) -> Result<i32, Error> {
        Self::int(self.0.period.nights())
    }

    /// Number of whole weeks in the stay.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.weeks", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn weeks(&self) -> Result<i32, Error> {
        Self::int(self.0.period.weeks)
    }

    /// Number of nights left after the whole weeks.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.days", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn days(&self) -> Result<i32, Error> {
        Self::int(self.0.period.days)
    }

    /// Number of weeks the stay is charged for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Quote.billedWeeks",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn billed_weeks(&self) -> Result<i32, Error> {
        Self::int(self.0.billed_weeks())
    }

    /// Indicates whether 4 or more leftover nights were rounded up into an
    /// extra week.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.roundedUp", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn rounded_up(&self) -> bool {
        self.0.is_rounded_up()
    }

    /// Way the leftover nights were billed.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.rounding", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn rounding(&self) -> Rounding {
        self.0.period.rounding.into()
    }

    /// Human-readable note describing how the leftover nights were billed.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.note", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn note(&self) -> String {
        self.0.period.to_string()
    }

    /// Human-readable formula the `total` was composed with.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.detail", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn detail(&self) -> String {
        self.0.detail()
    }

    /// Volume discount applied to the weekly base rate.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.discount", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn discount(&self) -> Percent {
        self.0.discount
    }

    /// Weekly base rate after the discount.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Quote.weeklyRate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn weekly_rate(&self) -> Money {
        self.0.weekly_rate
    }

    /// Price of the leftover nights charged per night.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.surcharge", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn surcharge(&self) -> Money {
        self.0.surcharge
    }

    /// Price of the stay itself.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.stayCost", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn stay_cost(&self) -> Money {
        self.0.stay_cost
    }

    /// Maintenance fee for every billed week.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Quote.maintenanceCost",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn maintenance_cost(&self) -> Money {
        self.0.maintenance_cost
    }

    /// One-time cleaning fee.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Quote.cleaningFee",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn cleaning_fee(&self) -> Money {
        self.0.cleaning_fee
    }

    /// Refundable deposit, not included into the `total`.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.deposit", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn deposit(&self) -> Money {
        self.0.deposit
    }

    /// Total price of the stay.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Quote.total", otel.name = api::Query::SPAN_NAME),
    )]
    pub fn total(&self) -> Money {
        self.0.total
    }
}

/// Way the leftover nights of a stay are billed.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "QuoteRounding")]
pub enum Rounding {
    /// 4 or more leftover nights are billed as one more week.
    Absorbed,

    /// Fewer than 4 leftover nights are charged per night.
    Surcharged,
}

impl From<domain::billing::Rounding> for Rounding {
    fn from(rounding: domain::billing::Rounding) -> Self {
        use domain::billing::Rounding as R;
        match rounding {
            R::Absorbed => Self::Absorbed,
            R::Surcharged => Self::Surcharged,
        }
    }
}
