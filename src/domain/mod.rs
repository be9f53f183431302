//! Domain model: the entity that specifications are evaluated against.

pub mod user;

pub use user::{User, UserType};
