//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{query, Query as _};

use crate::{api, error::RoomTypeError, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Lists all the `RoomType`s available for rent.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "roomTypes",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn room_types(ctx: &Context) -> Result<Vec<api::RoomType>, Error> {
        ctx.service()
            .execute(query::room_types::List)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `RoomType` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_TYPE_NOT_EXISTS` - the `RoomType` with the specified ID does
    ///                            not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "roomType",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn room_type(
        id: api::room_type::Id,
        ctx: &Context,
    ) -> Result<api::RoomType, Error> {
        ctx.service()
            .execute(query::room_type::ById::by(id.into()))
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| RoomTypeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Computes the itemized `Quote` of a stay.
    ///
    /// Dates are expected in `YYYY-MM-DD` format. A `checkOut` on or before
    /// the `checkIn` is quoted as zero nights.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - the `RoomType` ID or one of the dates is
    ///                     malformed;
    /// - `ROOM_TYPE_NOT_EXISTS` - the `RoomType` with the specified ID does
    ///                            not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            check_in = %check_in,
            check_out = %check_out,
            gql.name = "quote",
            otel.name = Self::SPAN_NAME,
            room_type = %room_type,
        ),
    )]
    pub fn quote(
        room_type: String,
        check_in: String,
        check_out: String,
        ctx: &Context,
    ) -> Result<api::Quote, Error> {
        let query =
            query::ComputeQuote::parse(&room_type, &check_in, &check_out)
                .map_err(AsError::into_error)
                .map_err(ctx.error())?;

        ctx.service()
            .execute(query)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}
