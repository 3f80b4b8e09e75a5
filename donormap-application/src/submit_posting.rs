use donormap_core::{gateways::donors::DonorGateway, workflow::PostingDraftWorkflow};
use donormap_entities::donor::{DonorPosting, PostingDraft};

use crate::Result;

/// Validates the draft, sends the creation request, and settles the
/// workflow with the outcome.
///
/// A rejected submission leaves the workflow failed with the service's
/// error text and the captured coordinate intact, so the user can correct
/// the fields and retry without another map click.
pub async fn submit_posting<G>(
    gateway: &G,
    workflow: &mut PostingDraftWorkflow,
    draft: &PostingDraft,
) -> Result<DonorPosting>
where
    G: DonorGateway,
{
    let posting = workflow.begin_submit(draft)?;
    match gateway.create(&posting).await {
        Ok(created) => {
            info!("Created posting {} at {}", created.id, created.pos);
            workflow.submit_succeeded(created.clone());
            Ok(created)
        }
        Err(err) => {
            warn!("Failed to create posting: {err}");
            workflow.submit_failed(err.to_string());
            Err(err.into())
        }
    }
}
