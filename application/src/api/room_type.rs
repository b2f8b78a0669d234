//! [`RoomType`]-related definitions.

use common::Money;
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLScalar, InputValue, ScalarValue, Value};
use service::domain;

use crate::{api, Context};

/// A room type available for rent.
#[derive(Clone, Debug, From)]
pub struct RoomType(domain::RoomType);

/// A room type available for rent.
#[graphql_object(context = Context)]
impl RoomType {
    /// Unique identifier of this `RoomType`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RoomType.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Human-readable name of this `RoomType`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RoomType.label",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn label(&self) -> String {
        self.0.label.to_string()
    }

    /// Weekly base rate of this `RoomType` before any discount.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RoomType.baseRate",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn base_rate(&self) -> Money {
        self.0.base_rate
    }

    /// Weekly maintenance fee of this `RoomType`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RoomType.maintenance",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn maintenance(&self) -> Money {
        self.0.maintenance
    }

    /// Price of a leftover night which is not rounded into a week.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "RoomType.extraNight",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn extra_night(&self) -> Money {
        self.0.extra_night
    }
}

/// Unique identifier of a `RoomType`, e.g. `oneRoom`.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RoomTypeId", with = Self, parse_token(String))]
pub struct Id(domain::room_type::Id);

impl Id {
    fn to_output<S: ScalarValue>(id: &Id) -> Value<S> {
        Value::scalar(id.0.to_string())
    }

    fn from_input<S: ScalarValue>(input: &InputValue<S>) -> Result<Self, String> {
        input
            .as_string_value()
            .ok_or_else(|| {
                format!(
                    "Cannot parse `RoomTypeId` input scalar from non-string \
                     value: {input}",
                )
            })
            .and_then(|s| {
                s.parse().map(Self).map_err(|e| {
                    format!("Cannot parse `RoomTypeId` input scalar: {e}")
                })
            })
    }
}
