//! [`Query`] collection related to a single [`RoomType`].

use std::convert::Infallible;

use crate::{
    domain::{room_type, RoomType},
    Query, Service,
};

/// Queries a [`RoomType`] by its [`room_type::Id`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ById(room_type::Id);

impl ById {
    /// Creates a new [`ById`] [`Query`] for the provided [`room_type::Id`].
    #[must_use]
    pub fn by(id: room_type::Id) -> Self {
        Self(id)
    }
}

impl Query<ById> for Service {
    type Ok = Option<RoomType>;
    type Err = Infallible;

    fn execute(&self, ById(id): ById) -> Result<Self::Ok, Self::Err> {
        Ok(self.config().rate_card.room_types.get(&id).cloned())
    }
}
