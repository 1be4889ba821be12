//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Repositories and unit of work over PostgreSQL
//! - `memory` - The same ports over process memory, for tests and local runs
//! - `graphql` - Schema and resolvers
//! - `http` - axum router exposing the schema

pub mod graphql;
pub mod http;
pub mod memory;
pub mod postgres;
