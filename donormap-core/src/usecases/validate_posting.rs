use donormap_entities::{
    donor::{BloodGroup, DonorPostingUpdate, NewDonorPosting, PostingDraft},
    geo::MapPoint,
};
use thiserror::Error;

use crate::{usecases::update_from_draft, util::validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostingInvalidation {
    #[error("First name is required")]
    FirstName,
    #[error("Last name is required")]
    LastName,
    #[error("Email should be valid")]
    Email,
    #[error("Contact number should be valid")]
    ContactNumber,
    #[error("Invalid blood group, valid values are O-, O+, A-, A+, B-, B+, AB-, AB+")]
    BloodGroup,
    #[error("Address is required")]
    Address,
}

impl PostingInvalidation {
    /// The wire name of the offending form field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::ContactNumber => "contactNumber",
            Self::BloodGroup => "bloodGroup",
            Self::Address => "address",
        }
    }
}

/// Checks every field and reports all offending ones at once, so a form
/// can mark them simultaneously.
pub fn validate_draft(draft: &PostingDraft) -> Vec<PostingInvalidation> {
    let mut invalid = Vec::new();
    if draft.first_name.trim().is_empty() {
        invalid.push(PostingInvalidation::FirstName);
    }
    if draft.last_name.trim().is_empty() {
        invalid.push(PostingInvalidation::LastName);
    }
    if !validate::is_valid_email(&draft.email) {
        invalid.push(PostingInvalidation::Email);
    }
    if !validate::is_valid_contact_number(&draft.contact_number) {
        invalid.push(PostingInvalidation::ContactNumber);
    }
    if draft.blood_group.parse::<BloodGroup>().is_err() {
        invalid.push(PostingInvalidation::BloodGroup);
    }
    if draft.address.trim().is_empty() {
        invalid.push(PostingInvalidation::Address);
    }
    invalid
}

/// Merges a validated draft with the captured map position into a
/// creation payload.
pub fn new_posting_from_draft(
    draft: &PostingDraft,
    pos: MapPoint,
) -> Result<NewDonorPosting, Vec<PostingInvalidation>> {
    let DonorPostingUpdate {
        first_name,
        last_name,
        email,
        contact_number,
        blood_group,
        address,
    } = update_from_draft(draft)?;
    Ok(NewDonorPosting {
        pos,
        first_name,
        last_name,
        email,
        contact_number,
        blood_group,
        address,
    })
}
