//! [`Config`]-related definitions.

use common::{Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use service::domain::{
    discount,
    room_type::{self, CatalogError},
    RateCard,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: Server,

    /// Rates configuration.
    #[serde(default)]
    pub rates: Rates,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Rates configuration.
///
/// Omitted fields fall back to the default [`RateCard`].
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Rates {
    /// Available room types, in the order they are listed.
    #[default(RateCard::default().room_types.iter().map(Into::into).collect())]
    pub room_types: Vec<RoomType>,

    /// Volume discounts of the weekly base rate.
    #[default(RateCard::default().discounts.iter().map(Into::into).collect())]
    pub discounts: Vec<Discount>,

    /// One-time cleaning fee.
    #[default(RateCard::default().cleaning_fee)]
    pub cleaning_fee: Money,

    /// Refundable deposit, reported but never charged.
    #[default(RateCard::default().deposit)]
    pub deposit: Money,
}

impl TryFrom<Rates> for service::Config {
    type Error = RatesError;

    fn try_from(value: Rates) -> Result<Self, Self::Error> {
        let Rates {
            room_types,
            discounts,
            cleaning_fee,
            deposit,
        } = value;

        let room_types = room_types
            .into_iter()
            .map(room_type::RoomType::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let discounts = discounts.into_iter().map(|d| discount::Tier {
            min_weeks: d.min_weeks,
            rate: d.rate,
        });

        Ok(Self {
            rate_card: RateCard {
                room_types: room_type::Catalog::new(room_types)?,
                discounts: discount::Table::new(discounts)?,
                cleaning_fee,
                deposit,
            },
        })
    }
}

/// Room type configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct RoomType {
    /// Unique identifier, e.g. `oneRoom`.
    pub id: String,

    /// Human-readable name.
    pub label: String,

    /// Weekly base rate, subject to volume discounts.
    pub base_rate: Money,

    /// Weekly maintenance fee.
    pub maintenance: Money,

    /// Price of a leftover night.
    pub extra_night: Money,
}

impl From<&room_type::RoomType> for RoomType {
    fn from(value: &room_type::RoomType) -> Self {
        Self {
            id: value.id.to_string(),
            label: value.label.to_string(),
            base_rate: value.base_rate,
            maintenance: value.maintenance,
            extra_night: value.extra_night,
        }
    }
}

impl TryFrom<RoomType> for room_type::RoomType {
    type Error = RatesError;

    fn try_from(value: RoomType) -> Result<Self, Self::Error> {
        let RoomType {
            id,
            label,
            base_rate,
            maintenance,
            extra_night,
        } = value;

        Ok(Self {
            id: room_type::Id::new(id.clone())
                .ok_or(RatesError::InvalidRoomTypeId(id))?,
            label: room_type::Label::new(label.clone())
                .ok_or(RatesError::InvalidRoomTypeLabel(label))?,
            base_rate,
            maintenance,
            extra_night,
        })
    }
}

/// Volume discount configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Discount {
    /// Minimal number of billed weeks the discount applies from.
    pub min_weeks: u32,

    /// Discount of the weekly base rate.
    pub rate: Percent,
}

impl From<&discount::Tier> for Discount {
    fn from(value: &discount::Tier) -> Self {
        Self {
            min_weeks: value.min_weeks,
            rate: value.rate,
        }
    }
}

/// Error of converting [`Rates`] into a [`service::Config`].
#[derive(Clone, Debug, Display, Error, From)]
pub enum RatesError {
    /// Room type ID is malformed.
    #[display("invalid room type ID `{_0}`")]
    #[from(ignore)]
    InvalidRoomTypeId(#[error(not(source))] String),

    /// Room type label is empty or too long.
    #[display("invalid room type label `{_0}`")]
    #[from(ignore)]
    InvalidRoomTypeLabel(#[error(not(source))] String),

    /// Room types are inconsistent.
    #[display("invalid room types: {_0}")]
    Catalog(CatalogError),

    /// Discount tiers are inconsistent.
    #[display("invalid discounts: {_0}")]
    Discounts(discount::TableError),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
