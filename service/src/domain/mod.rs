//! Domain definitions.

pub mod billing;
pub mod discount;
pub mod quote;
pub mod rate_card;
pub mod room_type;
pub mod stay;

pub use self::{
    billing::Period, quote::Quote, rate_card::RateCard, room_type::RoomType,
    stay::Stay,
};
