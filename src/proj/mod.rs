//! Geographic → UTM reprojection.

mod utm;
mod zone;

pub use utm::{Reproject, UtmReprojector};
pub use zone::{Hemisphere, UtmZone, zone_number};
