//! Domain layer: entities, query values and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Visit data as decoded from the store
//! - [`query`] - Immutable query values describing one round-trip each
//! - [`repositories`] - Row store and short URL resolver traits
//!
//! The domain layer has no dependency on SQL; rendering query values into
//! statements is the infrastructure layer's job.

pub mod entities;
pub mod query;
pub mod repositories;
