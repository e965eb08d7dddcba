//! Domain layer for the campus navigator SDK
//!
//! Contains the resource path codec, value objects and domain errors.
//! This crate performs no I/O.

pub mod errors;
pub mod resource;
pub mod value_objects;

pub use errors::DomainError;
pub use resource::{Grammar, Resource};
pub use value_objects::*;
