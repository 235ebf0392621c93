//! Conversions géographiques ⇄ cartésiennes géocentriques
//!
//! Les deux fonctions sont paramétrées par l'ellipsoïde du datum `D`.

use crate::datum::Datum;
use crate::types::{GeocentricPoint, GeodeticPoint};

/// Convertit un point géographique en coordonnées géocentriques
pub fn polar_to_cartesian<D: Datum>(point: &GeodeticPoint<D>) -> GeocentricPoint<D> {
    let el = point.ellipsoid();
    let e2 = el.eccentricity_squared();
    let (lat, lon) = point.to_radians();
    let h = point.height;

    let n = el.prime_vertical_radius(lat);
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    GeocentricPoint::new(
        (n + h) * cos_lat * cos_lon,
        (n + h) * cos_lat * sin_lon,
        (n * (1.0 - e2) + h) * sin_lat,
    )
}

/// Convertit des coordonnées géocentriques en point géographique
///
/// La latitude est affinée itérativement jusqu'à une variation inférieure à 1e-12 rad.
pub fn cartesian_to_polar<D: Datum>(point: &GeocentricPoint<D>) -> GeodeticPoint<D> {
    let el = D::ELLIPSOID;
    let e2 = el.eccentricity_squared();
    let p = point.x.hypot(point.y);
    let lon = point.y.atan2(point.x);

    let mut lat = point.z.atan2(p * (1.0 - e2));
    for _ in 0..10 {
        let n = el.prime_vertical_radius(lat);
        let new_lat = (point.z + e2 * n * lat.sin()).atan2(p);

        if (new_lat - lat).abs() < 1e-12 {
            lat = new_lat;
            break;
        }
        lat = new_lat;
    }

    let n = el.prime_vertical_radius(lat);
    let (sin_lat, cos_lat) = lat.sin_cos();
    // Près des pôles, cos(lat) → 0 : on passe par Z
    let height = if cos_lat.abs() > 1e-10 {
        p / cos_lat - n
    } else {
        point.z.abs() / sin_lat.abs() - n * (1.0 - e2)
    };

    GeodeticPoint::new(lat.to_degrees(), lon.to_degrees(), height)
}
