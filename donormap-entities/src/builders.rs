pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::donor_builder::*;

pub mod donor_builder {

    use super::*;
    use crate::{donor::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct DonorPostingBuild {
        posting: DonorPosting,
    }

    impl DonorPostingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.posting.id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.posting.pos = pos;
            self
        }
        pub fn first_name(mut self, first_name: &str) -> Self {
            self.posting.first_name = first_name.into();
            self
        }
        pub fn last_name(mut self, last_name: &str) -> Self {
            self.posting.last_name = last_name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.posting.email = email.into();
            self
        }
        pub fn contact_number(mut self, contact_number: &str) -> Self {
            self.posting.contact_number = contact_number.into();
            self
        }
        pub fn blood_group(mut self, blood_group: BloodGroup) -> Self {
            self.posting.blood_group = blood_group;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.posting.address = address.into();
            self
        }
        pub fn ip(mut self, ip: &str) -> Self {
            self.posting.ip = ip.into();
            self
        }
        pub fn finish(self) -> DonorPosting {
            self.posting
        }
    }

    impl Builder for DonorPosting {
        type Build = DonorPostingBuild;
        fn build() -> DonorPostingBuild {
            DonorPostingBuild {
                posting: DonorPosting {
                    id: Id::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    first_name: "Jane".into(),
                    last_name: "Doe".into(),
                    email: "jane.doe@example.org".into(),
                    contact_number: "+12024044567".into(),
                    blood_group: BloodGroup::OPositive,
                    address: "1 Example Street".into(),
                    ip: "127.0.0.1".into(),
                },
            }
        }
    }
}
