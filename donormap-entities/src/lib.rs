#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # donormap-entities
//!
//! Reusable, agnostic domain entities for the donor map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod donor;
pub mod geo;
pub mod id;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
