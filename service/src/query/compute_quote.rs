//! [`ComputeQuote`] [`Query`] definition.

use common::date;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room_type, stay, Period, Quote, Stay},
    Query, Service,
};

/// Computes the itemized [`Quote`] of a stay in a [`RoomType`].
///
/// [`RoomType`]: crate::domain::RoomType
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComputeQuote {
    /// ID of the [`RoomType`] to quote.
    ///
    /// [`RoomType`]: crate::domain::RoomType
    pub room_type_id: room_type::Id,

    /// Day the stay begins.
    pub check_in: stay::CheckInDate,

    /// Day the stay ends.
    pub check_out: stay::CheckOutDate,
}

impl ComputeQuote {
    /// Parses a [`ComputeQuote`] out of the raw user input.
    ///
    /// Dates are expected in the `YYYY-MM-DD` format.
    ///
    /// # Errors
    ///
    /// With an [`InputError`] naming the first malformed argument.
    pub fn parse(
        room_type_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            room_type_id: room_type_id
                .parse()
                .map_err(|_| InputError::InvalidRoomTypeId)?,
            check_in: check_in.parse().map_err(InputError::InvalidCheckIn)?,
            check_out: check_out.parse().map_err(InputError::InvalidCheckOut)?,
        })
    }
}

impl Query<ComputeQuote> for Service {
    type Ok = Quote;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: ComputeQuote) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ComputeQuote {
            room_type_id,
            check_in,
            check_out,
        } = query;

        let rate_card = &self.config().rate_card;
        let room_type = rate_card
            .room_types
            .get(&room_type_id)
            .ok_or_else(|| E::RoomTypeNotExists(room_type_id.clone()))
            .map_err(tracerr::wrap!())?;

        let stay = Stay {
            room_type_id,
            check_in,
            check_out,
        };
        let nights = stay.nights();
        let period = Period::from_nights(nights);
        let quote = rate_card.quote(room_type, period);

        log::debug!(
            room_type = %stay.room_type_id,
            check_in = %stay.check_in,
            check_out = %stay.check_out,
            nights,
            rounding = %period.rounding,
            total = %quote.total,
            "quote computed: {period}",
        );

        Ok(quote)
    }
}

/// Error of parsing a [`ComputeQuote`] out of the raw user input.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// Provided [`room_type::Id`] is malformed.
    #[display("Invalid `RoomTypeId`")]
    InvalidRoomTypeId,

    /// Provided check-in date is malformed.
    #[display("Invalid check-in date: {_0}")]
    InvalidCheckIn(date::ParseError),

    /// Provided check-out date is malformed.
    #[display("Invalid check-out date: {_0}")]
    InvalidCheckOut(date::ParseError),
}

/// Error of [`ComputeQuote`] [`Query`] execution.
#[derive(Clone, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`RoomType`] with the provided ID does not exist.
    ///
    /// [`RoomType`]: crate::domain::RoomType
    #[display("`RoomType(id: {_0})` does not exist")]
    RoomTypeNotExists(#[error(not(source))] room_type::Id),
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use crate::{
        domain::{room_type, RateCard, RoomType},
        Config, Query as _, Service,
    };

    use super::{ComputeQuote, ExecutionError, InputError};

    fn quote(
        service: &Service,
        room_type_id: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<crate::domain::Quote, ExecutionError> {
        let query =
            ComputeQuote::parse(room_type_id, check_in, check_out).unwrap();
        service.execute(query).map_err(tracerr::Traced::into_inner)
    }

    #[test]
    fn quotes_ten_nights_with_surcharge() {
        let service = Service::new(Config::default());

        let q = quote(&service, "oneRoom", "2025-03-01", "2025-03-11").unwrap();

        assert_eq!(q.period.nights(), 10);
        assert_eq!((q.period.weeks, q.period.days), (1, 3));
        assert_eq!(q.billed_weeks(), 1);
        assert_eq!(q.surcharge, Money::from(120_000_u32));
        assert_eq!(q.total, Money::from(370_000_u32));
        assert_eq!(
            q.period.to_string(),
            "1 week(s) 3 day(s) -> weekly rate plus 3 extra night(s)",
        );
    }

    #[test]
    fn quotes_eleven_nights_rounded_up() {
        let service = Service::new(Config::default());

        let q = quote(&service, "oneRoom", "2025-03-01", "2025-03-12").unwrap();

        assert_eq!(q.billed_weeks(), 2);
        assert!(q.is_rounded_up());
        assert_eq!(q.discount, Percent::try_from(5_u8).unwrap());
        assert_eq!(q.total, Money::from(435_000_u32));
    }

    #[test]
    fn quotes_six_weeks_with_top_discount() {
        let service = Service::new(Config::default());

        let q = quote(&service, "twoRoom", "2025-03-01", "2025-04-12").unwrap();

        assert_eq!(q.billed_weeks(), 6);
        assert_eq!(q.discount, Percent::try_from(25_u8).unwrap());
        assert_eq!(q.total, Money::from(1_595_000_u32));
        assert_eq!(q.deposit, Money::from(330_000_u32));
    }

    #[test]
    fn quotes_inverted_range_as_zero_nights() {
        let service = Service::new(Config::default());

        let q =
            quote(&service, "ownerUnit", "2025-03-11", "2025-03-01").unwrap();

        assert_eq!(q.period.nights(), 0);
        assert_eq!(q.billed_weeks(), 0);
        assert_eq!(q.total, Money::from(50_000_u32));
    }

    #[test]
    fn errors_on_unknown_room_type() {
        let service = Service::new(Config::default());

        let err =
            quote(&service, "penthouse", "2025-03-01", "2025-03-11").unwrap_err();

        assert!(matches!(
            err,
            ExecutionError::RoomTypeNotExists(id) if id.to_string() == "penthouse",
        ));
    }

    #[test]
    fn errors_on_malformed_input() {
        assert!(matches!(
            ComputeQuote::parse("one room", "2025-03-01", "2025-03-11"),
            Err(InputError::InvalidRoomTypeId),
        ));
        assert!(matches!(
            ComputeQuote::parse("oneRoom", "2025-13-01", "2025-03-11"),
            Err(InputError::InvalidCheckIn(_)),
        ));
        assert!(matches!(
            ComputeQuote::parse("oneRoom", "2025-03-01", "tomorrow"),
            Err(InputError::InvalidCheckOut(_)),
        ));
    }

    #[test]
    fn is_idempotent() {
        let service = Service::new(Config::default());

        let first = quote(&service, "twoRoom", "2025-01-10", "2025-02-20");
        let second = quote(&service, "twoRoom", "2025-01-10", "2025-02-20");

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn uses_configured_rate_card() {
        let service = Service::new(Config {
            rate_card: RateCard {
                room_types: room_type::Catalog::new([RoomType {
                    id: room_type::Id::new("studio").unwrap(),
                    label: room_type::Label::new("Studio").unwrap(),
                    base_rate: Money::from(700_u32),
                    maintenance: Money::from(70_u32),
                    extra_night: Money::from(100_u32),
                }])
                .unwrap(),
                ..RateCard::default()
            },
        });

        let q = quote(&service, "studio", "2025-03-01", "2025-03-09").unwrap();

        assert_eq!(q.billed_weeks(), 1);
        assert_eq!(q.total, Money::from(50_870_u32));
        assert!(quote(&service, "oneRoom", "2025-03-01", "2025-03-09").is_err());
    }
}
