use donormap_entities::donor::{DonorPostingUpdate, PostingDraft};

use crate::usecases::{validate_draft, PostingInvalidation};

/// Turns raw form input into an edit payload.
///
/// The result carries neither id, nor IP, nor any coordinate; the position
/// of a posting is fixed at creation and the rest is owned by the service.
pub fn update_from_draft(
    draft: &PostingDraft,
) -> Result<DonorPostingUpdate, Vec<PostingInvalidation>> {
    let invalid = validate_draft(draft);
    if !invalid.is_empty() {
        return Err(invalid);
    }
    let blood_group = draft
        .blood_group
        .parse()
        .map_err(|_| vec![PostingInvalidation::BloodGroup])?;
    Ok(DonorPostingUpdate {
        first_name: draft.first_name.trim().to_owned(),
        last_name: draft.last_name.trim().to_owned(),
        email: draft.email.clone(),
        contact_number: draft.contact_number.clone(),
        blood_group,
        address: draft.address.trim().to_owned(),
    })
}
