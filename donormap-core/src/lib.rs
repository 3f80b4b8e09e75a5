#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # donormap-core
//!
//! The synchronization engine that sits between a map viewport, the donor
//! posting service, and a marker rendering surface: bounding-box
//! derivation, throttled search scheduling, feature reconciliation, the
//! live-update bridge, and the posting draft workflow.

pub mod gateways;
pub mod live;
pub mod reconcile;
pub mod scheduler;
pub mod usecases;
pub mod util;
pub mod viewport;
pub mod workflow;

pub mod entities {
    pub use donormap_entities::{donor::*, geo::*, id::*, time::*};
}
