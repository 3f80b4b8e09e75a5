use donormap_entities as e;
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unknown blood group code: {0}")]
    BloodGroup(String),
    #[error(transparent)]
    Coordinate(#[from] e::geo::CoordRangeError),
    #[error("Unsupported geometry kind: {0}")]
    Geometry(String),
}

impl TryFrom<Donor> for e::donor::DonorPosting {
    type Error = ConversionError;

    fn try_from(from: Donor) -> Result<Self, Self::Error> {
        let Donor {
            id,
            first_name,
            last_name,
            email,
            contact_number,
            blood_group,
            address,
            ip,
            location,
        } = from;
        let blood_group = blood_group
            .parse()
            .map_err(|_| ConversionError::BloodGroup(blood_group))?;
        Ok(Self {
            id: id.into(),
            pos: e::geo::MapPoint::try_from(location)?,
            first_name,
            last_name,
            email,
            contact_number,
            blood_group,
            address,
            ip,
        })
    }
}

impl From<e::donor::DonorPosting> for Donor {
    fn from(from: e::donor::DonorPosting) -> Self {
        let e::donor::DonorPosting {
            id,
            pos,
            first_name,
            last_name,
            email,
            contact_number,
            blood_group,
            address,
            ip,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            contact_number,
            blood_group: blood_group.to_string(),
            address,
            ip,
            location: pos.into(),
        }
    }
}

impl TryFrom<GeoPoint> for e::geo::MapPoint {
    type Error = ConversionError;

    fn try_from(from: GeoPoint) -> Result<Self, Self::Error> {
        if from.kind != GeoPoint::KIND {
            return Err(ConversionError::Geometry(from.kind));
        }
        let [lng, lat] = from.coordinates;
        Ok(e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)?)
    }
}

impl From<e::geo::MapPoint> for GeoPoint {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self {
            kind: GeoPoint::KIND.into(),
            coordinates: [lng, lat],
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = e::geo::CoordRangeError;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        e::geo::MapPoint::try_from_lat_lng_deg(from.lat, from.lng)
    }
}

impl From<e::donor::NewDonorPosting> for NewDonor {
    fn from(from: e::donor::NewDonorPosting) -> Self {
        let e::donor::NewDonorPosting {
            pos,
            first_name,
            last_name,
            email,
            contact_number,
            blood_group,
            address,
        } = from;
        Self {
            first_name,
            last_name,
            email,
            contact_number,
            blood_group: blood_group.to_string(),
            address,
            coordinates: pos.into(),
        }
    }
}

impl From<e::donor::DonorPostingUpdate> for DonorUpdate {
    fn from(from: e::donor::DonorPostingUpdate) -> Self {
        let e::donor::DonorPostingUpdate {
            first_name,
            last_name,
            email,
            contact_number,
            blood_group,
            address,
        } = from;
        Self {
            first_name,
            last_name,
            email,
            contact_number,
            blood_group: blood_group.to_string(),
            address,
        }
    }
}

impl From<e::geo::MapBbox> for SearchQuery {
    fn from(from: e::geo::MapBbox) -> Self {
        let (ne_lat, ne_lng) = from.northeast().to_lat_lng_deg();
        let (sw_lat, sw_lng) = from.southwest().to_lat_lng_deg();
        Self {
            ne: [ne_lng, ne_lat],
            sw: [sw_lng, sw_lat],
        }
    }
}
