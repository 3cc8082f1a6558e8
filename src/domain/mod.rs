//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, events, state machines)
//! - `availability` - Weekly availability, slot validation and the editor

pub mod availability;
pub mod foundation;
