use std::fmt;

use serde::Serialize;

use crate::ProjectionError;

/// Half of the globe a UTM zone is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Latitude zero belongs to the northern hemisphere.
    #[inline]
    pub fn from_latitude(lat: f64) -> Self {
        if lat >= 0.0 { Hemisphere::North } else { Hemisphere::South }
    }
}

/// UTM zone number for a longitude in degrees: `floor((lon + 180) / 6) + 1`, clamped to 1..=60.
#[inline]
pub fn zone_number(lon: f64) -> u8 {
    (((lon + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8
}

/// A WGS84 UTM zone (EPSG 326zz north, 327zz south).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UtmZone {
    number: u8,
    hemisphere: Hemisphere,
}

impl UtmZone {
    pub fn new(number: u8, hemisphere: Hemisphere) -> Result<Self, ProjectionError> {
        if !(1..=60).contains(&number) {
            return Err(ProjectionError::InvalidZone(number))
        }
        Ok(Self { number, hemisphere })
    }

    /// Zone that contains the given lon/lat (degrees).
    #[inline]
    pub fn for_coord(lon: f64, lat: f64) -> Self {
        Self { number: zone_number(lon), hemisphere: Hemisphere::from_latitude(lat) }
    }

    #[inline] pub fn number(&self) -> u8 { self.number }

    #[inline] pub fn hemisphere(&self) -> Hemisphere { self.hemisphere }

    /// EPSG code of the destination CRS.
    #[inline]
    pub fn epsg(&self) -> u32 {
        match self.hemisphere {
            Hemisphere::North => 32600 + self.number as u32,
            Hemisphere::South => 32700 + self.number as u32,
        }
    }

    /// Longitude of the zone's central meridian in degrees.
    #[cfg(test)]
    fn central_meridian(&self) -> f64 {
        self.number as f64 * 6.0 - 183.0
    }

    /// PROJ.4 string for this zone on the WGS84 datum.
    pub(crate) fn proj4(&self) -> String {
        let zone = self.number;
        let south = match self.hemisphere {
            Hemisphere::North => "",
            Hemisphere::South => " +south",
        };
        format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs +type=crs")
    }
}

impl fmt::Display for UtmZone {
    /// Format as "32N" / "21S".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.hemisphere { Hemisphere::North => 'N', Hemisphere::South => 'S' };
        write!(f, "{}{}", self.number, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zone_number_at_band_edges() {
        assert_eq!(zone_number(-180.0), 1);
        assert_eq!(zone_number(-174.000001), 1);
        assert_eq!(zone_number(-174.0), 2);
        assert_eq!(zone_number(0.0), 31);
        assert_eq!(zone_number(10.0), 32);
        assert_eq!(zone_number(179.999), 60);
        assert_eq!(zone_number(180.0), 60); // clamped
    }

    #[test]
    fn equator_is_north() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(45.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(-0.0001), Hemisphere::South);
    }

    #[test]
    fn epsg_codes() {
        assert_eq!(UtmZone::for_coord(10.0, 50.0).epsg(), 32632);
        assert_eq!(UtmZone::for_coord(-58.4, -34.6).epsg(), 32721);
        assert_eq!(UtmZone::for_coord(10.0, 0.0).epsg(), 32632);
    }

    #[test]
    fn proj4_strings() {
        let north = UtmZone::new(32, Hemisphere::North).unwrap();
        let south = UtmZone::new(21, Hemisphere::South).unwrap();
        assert_eq!(north.proj4(), "+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs +type=crs");
        assert_eq!(south.proj4(), "+proj=utm +zone=21 +south +datum=WGS84 +units=m +no_defs +type=crs");
    }

    #[test]
    fn display_and_central_meridian() {
        let zone = UtmZone::for_coord(10.2, 50.3);
        assert_eq!(zone.to_string(), "32N");
        assert_eq!(zone.central_meridian(), 9.0);
        assert_eq!(UtmZone::new(1, Hemisphere::South).unwrap().central_meridian(), -177.0);
    }

    #[test]
    fn rejects_invalid_zone_numbers() {
        assert_eq!(UtmZone::new(0, Hemisphere::North), Err(ProjectionError::InvalidZone(0)));
        assert_eq!(UtmZone::new(61, Hemisphere::South), Err(ProjectionError::InvalidZone(61)));
    }

    proptest! {
        #[test]
        fn zone_matches_formula(lon in -180.0..180.0_f64) {
            let zone = zone_number(lon);
            prop_assert!((1..=60).contains(&zone));
            prop_assert_eq!(zone as i64, (((lon + 180.0) / 6.0).floor() as i64 + 1).min(60));
        }

        #[test]
        fn zone_is_monotone(a in -180.0..180.0_f64, b in -180.0..180.0_f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(zone_number(lo) <= zone_number(hi));
        }

        #[test]
        fn hemisphere_follows_latitude_sign(lat in -90.0..=90.0_f64) {
            let expected = if lat >= 0.0 { Hemisphere::North } else { Hemisphere::South };
            prop_assert_eq!(Hemisphere::from_latitude(lat), expected);
        }
    }
}
