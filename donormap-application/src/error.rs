use donormap_core::{
    gateways::donors::Error as GatewayError,
    usecases::PostingInvalidation,
    workflow::{CaptureError, SubmitError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("The posting fields are invalid")]
    Invalid(Vec<PostingInvalidation>),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<Vec<PostingInvalidation>> for AppError {
    fn from(invalid: Vec<PostingInvalidation>) -> Self {
        Self::Invalid(invalid)
    }
}
