//! GraphQL API definitions.

mod query;
pub mod quote;
pub mod room_type;

use juniper::{EmptyMutation, EmptySubscription};

pub use self::{query::Query, quote::Quote, room_type::RoomType};

use crate::Context;

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    EmptyMutation<Context>,
    EmptySubscription<Context>,
>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}
