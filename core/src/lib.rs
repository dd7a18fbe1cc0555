//! Pure domain services for SkillScout.
//!
//! Nothing in this crate touches the terminal, the clock, or the filesystem:
//! the resource catalog is compiled in, lookup is a normalized table query,
//! and validation is a pair of pure functions. The engine drives these from
//! user events.

mod catalog;
mod lookup;
mod validation;

pub use catalog::ResourceCatalog;
pub use lookup::{Lookup, resolve, resolve_detailed, resolve_in};
pub use validation::{ContactSubmission, validate_contact, validate_email, validate_submission};
