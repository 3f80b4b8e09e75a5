//! # donormap-boundary
//!
//! Serializable, anemic data structures mirroring the donor service's
//! JSON wire format, together with conversions from and into the
//! domain entities.

use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::ConversionError;

/// A donor posting as the service returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: String,
    pub address: String,
    pub ip: String,
    pub location: GeoPoint,
}

/// GeoJSON-style point geometry with `coordinates` ordered `[lng, lat]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub const KIND: &'static str = "Point";
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Payload for creating a posting. The service assigns `id` and `ip`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDonor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: String,
    pub address: String,
    pub coordinates: Coordinate,
}

/// Payload for editing a posting. Deliberately carries neither id, ip,
/// nor any coordinate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonorUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub blood_group: String,
    pub address: String,
}

/// Query corners for a bounding box search, each ordered `[lng, lat]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub ne: [f64; 2],
    pub sw: [f64; 2],
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub items: Vec<Donor>,
}

/// Error body the service sends alongside non-2xx statuses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
