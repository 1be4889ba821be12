//! Muscle Management - Personal training log
//!
//! Records one training session per calendar day with the exercises
//! performed, and serves them through a GraphQL API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
