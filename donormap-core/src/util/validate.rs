use donormap_entities::geo::MapBbox;
use lazy_static::lazy_static;
use regex::Regex;

pub use fast_chemail::is_valid_email;

lazy_static! {
    // Leading `00` or `+`, then 11 to 13 digits.
    static ref CONTACT_NUMBER: Regex = Regex::new(r"^(00|\+)\d{11,13}$").unwrap();
}

pub fn is_valid_contact_number(nr: &str) -> bool {
    CONTACT_NUMBER.is_match(nr)
}

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid() && !bbox.is_empty()
}
