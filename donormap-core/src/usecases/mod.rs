mod prepare_update;
mod validate_posting;

pub use self::{prepare_update::*, validate_posting::*};
