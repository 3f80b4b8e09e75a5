use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{geo::MapPoint, id::Id};

/// The eight canonical ABO/Rh blood group codes.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, EnumString)]
pub enum BloodGroup {
    #[strum(serialize = "O-")]  ONegative,
    #[strum(serialize = "O+")]  OPositive,
    #[strum(serialize = "A-")]  ANegative,
    #[strum(serialize = "A+")]  APositive,
    #[strum(serialize = "B-")]  BNegative,
    #[strum(serialize = "B+")]  BPositive,
    #[strum(serialize = "AB-")] AbNegative,
    #[strum(serialize = "AB+")] AbPositive,
}

/// A donor's published posting.
///
/// `id` and `ip` are assigned by the backing service when the posting is
/// created and are never writable by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorPosting {
    pub id: Id,
    pub pos: MapPoint,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: BloodGroup,
    pub address: String,
    /// Last activity IP as reported by the service.
    pub ip: String,
}

/// A validated posting ready for creation, merged with the coordinate the
/// donor picked on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonorPosting {
    pub pos: MapPoint,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: BloodGroup,
    pub address: String,
}

/// A validated edit of an existing posting.
///
/// Neither the id, the reported IP, nor the coordinate appear here: the
/// position of a posting is fixed at creation and the rest is owned by the
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorPostingUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: BloodGroup,
    pub address: String,
}

/// Raw, unvalidated form input for a posting, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn blood_group_codes() {
        assert_eq!(8, BloodGroup::COUNT);
        assert_eq!("O-", BloodGroup::ONegative.to_string());
        assert_eq!("AB+", BloodGroup::AbPositive.to_string());
        for group in BloodGroup::iter() {
            assert_eq!(Ok(group), group.to_string().parse());
        }
    }

    #[test]
    fn unknown_blood_group_code() {
        assert!("X+".parse::<BloodGroup>().is_err());
        assert!("".parse::<BloodGroup>().is_err());
        assert!("o-".parse::<BloodGroup>().is_err());
    }
}
