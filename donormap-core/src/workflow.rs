use donormap_entities::{
    donor::{DonorPosting, NewDonorPosting, PostingDraft},
    geo::MapPoint,
};
use thiserror::Error;

use crate::usecases::{new_posting_from_draft, PostingInvalidation};

/// Lifecycle of a posting draft, from map click to server response.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DraftState {
    #[default]
    Empty,
    Capturing {
        pos: MapPoint,
    },
    Submitting {
        pos: MapPoint,
    },
    Succeeded {
        posting: DonorPosting,
    },
    /// The draft survives a failed submission so the user can correct and
    /// retry without picking the coordinate again.
    Failed {
        pos: MapPoint,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Coordinate out of geographic range")]
    InvalidCoordinate,
    #[error("A submission is still in progress")]
    SubmissionPending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No coordinate has been captured")]
    NoCoordinate,
    #[error("A submission is still in progress")]
    SubmissionPending,
    #[error("The posting fields are invalid")]
    Invalid(Vec<PostingInvalidation>),
}

/// Pure state machine behind the "add donor" form.
///
/// The machine never talks to the network itself: `begin_submit` hands a
/// validated creation payload to the caller, which reports the outcome
/// back via `submit_succeeded`/`submit_failed`.
#[derive(Debug, Default)]
pub struct PostingDraftWorkflow {
    state: DraftState,
}

impl PostingDraftWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &DraftState {
        &self.state
    }

    /// Records the map coordinate the user clicked.
    pub fn capture(&mut self, lat: f64, lng: f64) -> Result<MapPoint, CaptureError> {
        if matches!(self.state, DraftState::Submitting { .. }) {
            return Err(CaptureError::SubmissionPending);
        }
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
            .map_err(|_| CaptureError::InvalidCoordinate)?;
        self.state = DraftState::Capturing { pos };
        Ok(pos)
    }

    /// Validates the draft and merges it with the captured coordinate.
    ///
    /// On success the workflow is `Submitting` and the returned payload is
    /// ready for the gateway. Validation failures leave the state (and the
    /// captured coordinate) untouched.
    pub fn begin_submit(&mut self, draft: &PostingDraft) -> Result<NewDonorPosting, SubmitError> {
        let pos = match &self.state {
            DraftState::Capturing { pos } | DraftState::Failed { pos, .. } => *pos,
            DraftState::Submitting { .. } => return Err(SubmitError::SubmissionPending),
            DraftState::Empty | DraftState::Succeeded { .. } => {
                return Err(SubmitError::NoCoordinate)
            }
        };
        let posting = new_posting_from_draft(draft, pos).map_err(SubmitError::Invalid)?;
        self.state = DraftState::Submitting { pos };
        Ok(posting)
    }

    pub fn submit_succeeded(&mut self, posting: DonorPosting) {
        debug_assert!(matches!(self.state, DraftState::Submitting { .. }));
        self.state = DraftState::Succeeded { posting };
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if let DraftState::Submitting { pos } = &self.state {
            self.state = DraftState::Failed {
                pos: *pos,
                message: message.into(),
            };
        }
    }

    /// Dismissing the form drops the draft entirely.
    pub fn dismiss(&mut self) {
        self.state = DraftState::Empty;
    }
}
