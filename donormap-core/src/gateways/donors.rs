use async_trait::async_trait;
use donormap_entities::{
    donor::{DonorPosting, DonorPostingUpdate, NewDonorPosting},
    geo::MapBbox,
    id::Id,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested posting could not be found")]
    NotFound,
    #[error("The donor service rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Remote donor posting service.
///
/// The transport (conventional JSON over HTTP in production) lives with
/// the embedding application; the engine only depends on this contract.
/// `id` and `ip` of created postings are assigned by the service.
#[async_trait]
pub trait DonorGateway: Send + Sync {
    /// All postings located inside the given bounding box.
    async fn search(&self, bbox: &MapBbox) -> Result<Vec<DonorPosting>>;

    async fn create(&self, posting: &NewDonorPosting) -> Result<DonorPosting>;

    /// Rejects unknown ids with [`Error::NotFound`].
    async fn update(&self, id: &Id, update: &DonorPostingUpdate) -> Result<DonorPosting>;

    async fn get(&self, id: &Id) -> Result<DonorPosting>;

    async fn delete(&self, id: &Id) -> Result<()>;
}
