//! Bandes méridiennes du Bundesmeldenetz
//!
//! Les trois bandes M28, M31 et M34 doivent leur nom à leur méridien central
//! exprimé à l'ouest de l'île de Fer (Hierro) : 28°, 31° et 34°, soit
//! 10°20', 13°20' et 16°20' à l'est de Greenwich.

use std::fmt;
use std::str::FromStr;

use crate::error::BmnError;
use crate::tmerc::ProjectionOrigin;

/// Les limites de bande tombent à x°50'
const EDGE_OFFSET: f64 = 0.5 / 6.0 * 10.0;

/// False northing commun aux trois bandes
pub const FALSE_NORTHING: f64 = -5000000.0;

/// Bande méridienne BMN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridian {
    M28,
    M31,
    M34,
}

impl Meridian {
    /// Toutes les bandes, dans l'ordre de résolution
    pub const ALL: [Meridian; 3] = [Meridian::M28, Meridian::M31, Meridian::M34];

    /// Code texte de la bande
    pub fn code(self) -> &'static str {
        match self {
            Meridian::M28 => "M28",
            Meridian::M31 => "M31",
            Meridian::M34 => "M34",
        }
    }

    /// Longitude du méridien central en degrés (Greenwich)
    pub fn central_meridian(self) -> f64 {
        match self {
            Meridian::M28 => 10.0 + 20.0 / 60.0,
            Meridian::M31 => 13.0 + 20.0 / 60.0,
            Meridian::M34 => 16.0 + 20.0 / 60.0,
        }
    }

    /// False easting de la bande
    pub fn false_easting(self) -> f64 {
        match self {
            Meridian::M28 => 150000.0,
            Meridian::M31 => 450000.0,
            Meridian::M34 => 750000.0,
        }
    }

    /// Origine de la projection Transverse Mercator de la bande
    pub fn projection_origin(self) -> ProjectionOrigin {
        ProjectionOrigin {
            lat0: 0.0,
            lon0: self.central_meridian(),
            k0: 1.0,
            x0: self.false_easting(),
            y0: FALSE_NORTHING,
        }
    }

    /// Bornes (ouest, est) de la bande en degrés, bornes incluses
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Meridian::M28 => (8.0 + EDGE_OFFSET, 11.0 + EDGE_OFFSET),
            Meridian::M31 => (11.0 + EDGE_OFFSET, 14.0 + EDGE_OFFSET),
            Meridian::M34 => (14.0 + EDGE_OFFSET, 17.0 + EDGE_OFFSET),
        }
    }

    /// Détermine la bande couvrant une longitude MGI
    ///
    /// Les bornes sont testées d'ouest en est et la première bande qui
    /// contient la longitude l'emporte : une longitude posée exactement sur
    /// une limite commune revient à la bande ouest.
    pub fn resolve(longitude: f64) -> Option<Meridian> {
        Self::ALL.into_iter().find(|m| {
            let (west, east) = m.bounds();
            east >= longitude && longitude >= west
        })
    }
}

impl fmt::Display for Meridian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Meridian {
    type Err = BmnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| s.eq_ignore_ascii_case(m.code()))
            .ok_or_else(|| BmnError::UnrecognizedZoneCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_central_meridians() {
        for m in Meridian::ALL {
            assert_eq!(Meridian::resolve(m.central_meridian()), Some(m));
        }
    }

    #[test]
    fn test_resolve_shared_boundary_goes_west() {
        // 11°50' : limite commune M28 / M31
        assert_eq!(Meridian::resolve(11.0 + EDGE_OFFSET), Some(Meridian::M28));
        // 14°50' : limite commune M31 / M34
        assert_eq!(Meridian::resolve(14.0 + EDGE_OFFSET), Some(Meridian::M31));
        assert_eq!(Meridian::resolve(11.0833), Some(Meridian::M28));
    }

    #[test]
    fn test_resolve_outer_bounds() {
        assert_eq!(Meridian::resolve(8.0 + EDGE_OFFSET), Some(Meridian::M28));
        assert_eq!(Meridian::resolve(17.0 + EDGE_OFFSET), Some(Meridian::M34));
        assert_eq!(Meridian::resolve(8.8), None);
        assert_eq!(Meridian::resolve(17.9), None);
        assert_eq!(Meridian::resolve(2.35), None);
        assert_eq!(Meridian::resolve(f64::NAN), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("M28".parse::<Meridian>().unwrap(), Meridian::M28);
        assert_eq!("m31".parse::<Meridian>().unwrap(), Meridian::M31);
        assert_eq!(
            "X31".parse::<Meridian>(),
            Err(BmnError::UnrecognizedZoneCode("X31".to_string()))
        );
    }

    #[test]
    fn test_projection_origin() {
        let origin = Meridian::M34.projection_origin();
        assert_eq!(origin.x0, 750000.0);
        assert_eq!(origin.y0, -5000000.0);
        assert_eq!(origin.k0, 1.0);
        assert!((origin.lon0 - 16.333333333).abs() < 1e-8);
    }
}
