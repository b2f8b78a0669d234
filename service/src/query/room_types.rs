//! [`Query`] collection related to multiple [`RoomType`]s.

use std::convert::Infallible;

use crate::{domain::RoomType, Query, Service};

/// Lists all the configured [`RoomType`]s in their catalog order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct List;

impl Query<List> for Service {
    type Ok = Vec<RoomType>;
    type Err = Infallible;

    fn execute(&self, _: List) -> Result<Self::Ok, Self::Err> {
        Ok(self.config().rate_card.room_types.iter().cloned().collect())
    }
}
