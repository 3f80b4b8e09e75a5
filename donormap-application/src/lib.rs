//! # donormap-application
//!
//! Async flows gluing the synchronization engine to its collaborators:
//! the per-view sync session, the posting submit/edit flows, and the
//! configuration layer.

#[macro_use]
extern crate log;

mod delete_posting;
mod load_posting;
mod submit_posting;
mod sync_view;
mod update_posting;

pub mod prelude {
    pub use super::{
        delete_posting::*, load_posting::*, submit_posting::*, sync_view::*, update_posting::*,
    };
}

pub mod config;
pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

#[cfg(test)]
pub(crate) mod tests;
