//! Projection Transverse Mercator (Gauss-Krüger)
//!
//! Développements en série classiques (Snyder, USGS PP 1395) :
//! - arc de méridien jusqu'à e⁶
//! - latitude du pied (footpoint) par la série en e₁ jusqu'à 8μ
//!
//! Précision millimétrique à ±1.5° du méridien central. Au-delà, la série
//! diverge progressivement et le résultat n'est pas garanti.

use crate::datum::Datum;
use crate::ellipsoid::Ellipsoid;
use crate::types::{GeodeticPoint, GridPoint};

/// Paramètres d'origine d'une projection Transverse Mercator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOrigin {
    /// Latitude origine en degrés
    pub lat0: f64,
    /// Longitude du méridien central en degrés
    pub lon0: f64,
    /// Facteur d'échelle sur le méridien central
    pub k0: f64,
    /// False easting
    pub x0: f64,
    /// False northing
    pub y0: f64,
}

/// Longueur de l'arc de méridien entre l'équateur et la latitude `lat` (radians)
fn meridian_arc(lat: f64, el: &Ellipsoid) -> f64 {
    let e2 = el.eccentricity_squared();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    el.a * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat
        - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * lat).sin())
}

/// Projette un point géographique sur le plan, sur l'ellipsoïde de son datum
pub fn direct<D: Datum>(point: &GeodeticPoint<D>, origin: &ProjectionOrigin) -> GridPoint {
    let el = point.ellipsoid();
    let e2 = el.eccentricity_squared();
    let ep2 = el.second_eccentricity_squared();
    let k0 = origin.k0;

    let (lat, lon) = point.to_radians();
    let lon0 = origin.lon0.to_radians();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let tan_lat = lat.tan();

    let n = el.a / (1.0 - e2 * sin_lat.powi(2)).sqrt();
    let t = tan_lat.powi(2);
    let c = ep2 * cos_lat.powi(2);
    let a = (lon - lon0) * cos_lat;

    let m = meridian_arc(lat, el);
    let m0 = meridian_arc(origin.lat0.to_radians(), el);

    let x = k0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t.powi(2) + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0);

    let y = k0
        * (m - m0
            + n * tan_lat
                * (a.powi(2) / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c.powi(2)) * a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t.powi(2) + 600.0 * c - 330.0 * ep2) * a.powi(6)
                        / 720.0));

    GridPoint::new(origin.x0 + x, origin.y0 + y)
}

/// Inverse de [`direct`] : le datum de sortie est celui choisi par l'appelant
///
/// La hauteur du point retourné est nulle.
pub fn inverse<D: Datum>(point: &GridPoint, origin: &ProjectionOrigin) -> GeodeticPoint<D> {
    let el = D::ELLIPSOID;
    let a = el.a;
    let e2 = el.eccentricity_squared();
    let ep2 = el.second_eccentricity_squared();
    let k0 = origin.k0;

    // Coordonnées réduites
    let x = point.easting - origin.x0;
    let y = point.northing - origin.y0;

    // Calcul du footprint latitude
    let m = meridian_arc(origin.lat0.to_radians(), el) + y / k0;
    let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0));

    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let tan_phi1 = phi1.tan();

    let n1 = el.prime_vertical_radius(phi1);
    let t1 = tan_phi1.powi(2);
    let c1 = ep2 * cos_phi1.powi(2);
    let r1 = a * (1.0 - e2) / (1.0 - e2 * sin_phi1.powi(2)).powf(1.5);
    let d = x / (n1 * k0);

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d.powi(2) / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2) - 252.0 * ep2 - 3.0 * c1.powi(2))
                    * d.powi(6)
                    / 720.0);

    let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * ep2 + 24.0 * t1.powi(2))
            * d.powi(5)
            / 120.0)
        / cos_phi1;

    GeodeticPoint::new(lat.to_degrees(), origin.lon0 + lon.to_degrees(), 0.0)
}
