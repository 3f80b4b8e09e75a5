use donormap_core::{gateways::donors::DonorGateway, usecases};
use donormap_entities::{
    donor::{DonorPosting, PostingDraft},
    id::Id,
};

use crate::Result;

/// Validates the edited fields and sends the update.
///
/// The update payload structurally omits id, IP, and coordinate, so the
/// service-owned parts of the posting cannot be tampered with from here.
pub async fn update_posting<G>(
    gateway: &G,
    id: &Id,
    draft: &PostingDraft,
) -> Result<DonorPosting>
where
    G: DonorGateway,
{
    let update = usecases::update_from_draft(draft)?;
    let updated = gateway.update(id, &update).await.map_err(|err| {
        warn!("Failed to update posting {id}: {err}");
        err
    })?;
    Ok(updated)
}
