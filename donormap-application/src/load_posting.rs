use donormap_core::gateways::donors::DonorGateway;
use donormap_entities::{donor::DonorPosting, id::Id};

use crate::Result;

/// Fetches a single posting, e.g. for the shareable detail view.
pub async fn load_posting<G>(gateway: &G, id: &Id) -> Result<DonorPosting>
where
    G: DonorGateway,
{
    let posting = gateway.get(id).await.map_err(|err| {
        warn!("Failed to load posting {id}: {err}");
        err
    })?;
    Ok(posting)
}
