use donormap_entities::geo::{MapBbox, MapPoint};
use thiserror::Error;

use crate::util::validate;

/// The rectangular map area currently visible, projected to geographic
/// degrees with `x` as longitude and `y` as latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid viewport extent")]
pub struct InvalidExtent;

/// Normalizes a viewport extent into the bounding box used as a search
/// query region.
///
/// Wide zoom levels routinely overshoot the valid coordinate range at the
/// edges; overshoot is clamped rather than rejected. Non-finite values,
/// inverted extents, and extents that collapse to a line or point are
/// malformed and rejected.
pub fn bbox_from_extent(extent: &Extent) -> Result<MapBbox, InvalidExtent> {
    let Extent {
        x_min,
        y_min,
        x_max,
        y_max,
    } = *extent;
    if ![x_min, y_min, x_max, y_max].iter().all(|deg| deg.is_finite()) {
        return Err(InvalidExtent);
    }
    if x_min > x_max || y_min > y_max {
        return Err(InvalidExtent);
    }
    let sw = MapPoint::from_lat_lng_deg(y_min.clamp(-90.0, 90.0), x_min.clamp(-180.0, 180.0));
    let ne = MapPoint::from_lat_lng_deg(y_max.clamp(-90.0, 90.0), x_max.clamp(-180.0, 180.0));
    let bbox = MapBbox::new(sw, ne);
    if !validate::is_valid_bbox(&bbox) {
        return Err(InvalidExtent);
    }
    Ok(bbox)
}
