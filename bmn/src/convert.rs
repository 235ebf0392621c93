//! Conversions BMN ⇄ WGS84
//!
//! Chaîne de traitement :
//! - BMN → WGS84 : TM inverse (Bessel) → cartésien → Helmert inverse → géographique WGS84
//! - WGS84 → BMN : cartésien → Helmert → géographique MGI → bande → TM directe
//!
//! La précision est limitée à quelques mètres par le jeu de paramètres
//! Helmert unique utilisé pour toute l'Autriche.

use crate::datum::{mgi_to_wgs84, wgs84_to_mgi, Mgi, Wgs84};
use crate::error::BmnError;
use crate::tmerc;
use crate::types::{GeodeticPoint, GridPoint};
use crate::zone::Meridian;
use crate::BmnCoord;

/// Convertit une coordonnée BMN en latitude / longitude WGS84
///
/// La hauteur relative est interprétée comme une hauteur au-dessus de
/// l'ellipsoïde de Bessel.
pub fn to_geodetic(coord: &BmnCoord) -> Result<GeodeticPoint<Wgs84>, BmnError> {
    if !(coord.right.is_finite() && coord.height.is_finite() && coord.rel_height.is_finite()) {
        return Err(BmnError::NonFiniteCoordinate("BMN coordinate"));
    }

    let origin = coord.meridian.projection_origin();
    let grid = GridPoint::new(coord.right, coord.height);

    let mut local: GeodeticPoint<Mgi> = tmerc::inverse(&grid, &origin);
    local.height = coord.rel_height;

    Ok(mgi_to_wgs84(&local))
}

/// Convertit un point WGS84 en coordonnée BMN
///
/// Sans bande explicite, la bande est déduite de la longitude MGI du point.
/// Une bande explicite est toujours prioritaire.
pub fn to_grid(
    point: &GeodeticPoint<Wgs84>,
    meridian: Option<Meridian>,
) -> Result<BmnCoord, BmnError> {
    if !point.is_finite() {
        return Err(BmnError::NonFiniteCoordinate("geodetic point"));
    }

    let local = wgs84_to_mgi(point);

    let meridian = match meridian {
        Some(m) => m,
        None => Meridian::resolve(local.long).ok_or(BmnError::UnresolvedZone {
            longitude: local.long,
        })?,
    };

    let grid = tmerc::direct(&local, &meridian.projection_origin());

    Ok(BmnCoord::new(
        meridian,
        grid.easting,
        grid.northing,
        local.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vienna_to_bmn() {
        // Vienne, Stephansdom
        let p = GeodeticPoint::<Wgs84>::new(48.208333, 16.372778, 0.0);
        let c = to_grid(&p, None).unwrap();

        assert_eq!(c.meridian, Meridian::M34);
        assert!((c.right - 753020.835).abs() < 0.01, "right={}", c.right);
        assert!((c.height - 341104.125).abs() < 0.01, "height={}", c.height);
    }

    #[test]
    fn test_bmn_to_wgs84() {
        let c = BmnCoord::parse("M31 450000 350000").unwrap();
        let p = to_geodetic(&c).unwrap();

        assert!((p.lat - 48.2882418187).abs() < 1e-8, "lat={}", p.lat);
        assert!((p.long - 13.3325398333).abs() < 1e-8, "long={}", p.long);
    }

    #[test]
    fn test_explicit_meridian_wins() {
        // Innsbruck tombe dans M28, on force M31
        let p = GeodeticPoint::<Wgs84>::new(47.26543, 11.392769, 0.0);
        let auto = to_grid(&p, None).unwrap();
        let forced = to_grid(&p, Some(Meridian::M31)).unwrap();

        assert_eq!(auto.meridian, Meridian::M28);
        assert_eq!(forced.meridian, Meridian::M31);
        assert!(forced.right < 450000.0, "right={}", forced.right);

        let back = to_geodetic(&forced).unwrap();
        assert!((back.lat - p.lat).abs() < 1e-7, "lat={}", back.lat);
        assert!((back.long - p.long).abs() < 1e-7, "long={}", back.long);
    }

    #[test]
    fn test_unresolved_zone() {
        // Paris : hors de toute bande BMN
        let p = GeodeticPoint::<Wgs84>::new(48.85, 2.35, 0.0);
        match to_grid(&p, None) {
            Err(BmnError::UnresolvedZone { longitude }) => {
                assert!((longitude - 2.35).abs() < 0.01, "longitude={}", longitude)
            }
            other => panic!("Expected UnresolvedZone, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let p = GeodeticPoint::<Wgs84>::new(f64::NAN, 16.0, 0.0);
        assert_eq!(
            to_grid(&p, None),
            Err(BmnError::NonFiniteCoordinate("geodetic point"))
        );

        let c = BmnCoord::new(Meridian::M28, f64::INFINITY, 0.0, 0.0);
        assert!(matches!(
            to_geodetic(&c),
            Err(BmnError::NonFiniteCoordinate(_))
        ));
    }

    #[test]
    fn test_height_carried_through() {
        let p = GeodeticPoint::<Wgs84>::new(47.80949, 13.05501, 424.0);
        let c = to_grid(&p, None).unwrap();
        // La hauteur ellipsoïdale MGI est environ 47 m sous la hauteur WGS84
        assert!((c.rel_height - (424.0 - 47.1)).abs() < 1.0, "h={}", c.rel_height);

        let back = to_geodetic(&c).unwrap();
        assert!((back.height - 424.0).abs() < 1e-3, "h={}", back.height);
    }
}
