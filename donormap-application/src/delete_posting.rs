use donormap_core::gateways::donors::DonorGateway;
use donormap_entities::id::Id;

use crate::Result;

/// Removes a posting for good.
pub async fn delete_posting<G>(gateway: &G, id: &Id) -> Result<()>
where
    G: DonorGateway,
{
    gateway.delete(id).await.map_err(|err| {
        warn!("Failed to delete posting {id}: {err}");
        err
    })?;
    info!("Deleted posting {id}");
    Ok(())
}
