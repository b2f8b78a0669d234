//! Service contains the business logic of the application: quoting stays
//! according to the configured [`RateCard`].
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod query;

use std::sync::Arc;

use domain::RateCard;

pub use self::query::Query;

/// [`Service`] configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// [`RateCard`] every quote is computed with.
    pub rate_card: RateCard,
}

/// Domain service.
///
/// Cloning is cheap: the [`Config`] is shared and never mutated.
#[derive(Clone, Debug)]
pub struct Service {
    /// Configuration of this [`Service`].
    config: Arc<Config>,
}

impl Service {
    /// Creates a new [`Service`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
