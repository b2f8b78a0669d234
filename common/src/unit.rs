//! Marker types.

/// Marker type describing the first day of a stay.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing the day a stay ends.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;
