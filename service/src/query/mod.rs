//! [`Query`] definition.

pub mod compute_quote;
pub mod room_type;
pub mod room_types;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::compute_quote::ComputeQuote;
