//! GraphQL adapter - Schema, resolvers and scalars.
//!
//! Resolvers only route: map arguments onto one command or query, call its
//! handler, convert the result. Handlers reach resolvers through the schema
//! context as a `GraphqlHandlers` bundle.

mod errors;
mod handlers;
mod inputs;
mod mutation;
mod query;
mod scalars;
mod types;

use async_graphql::{EmptySubscription, Schema};

pub use handlers::GraphqlHandlers;
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use scalars::{GqlDate, GqlDateTime};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the executable schema around a handler bundle.
pub fn build_schema(handlers: GraphqlHandlers) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(handlers)
        .finish()
}
