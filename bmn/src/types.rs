//! Types de coordonnées manipulés par le moteur

use std::fmt;
use std::marker::PhantomData;

use crate::datum::Datum;
use crate::ellipsoid::Ellipsoid;

/// Point en coordonnées géographiques (degrés décimaux) sur le datum `D`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint<D: Datum> {
    /// Latitude en degrés
    pub lat: f64,
    /// Longitude en degrés (positive à l'est de Greenwich)
    pub long: f64,
    /// Hauteur au-dessus de l'ellipsoïde en mètres
    pub height: f64,
    datum: PhantomData<D>,
}

impl<D: Datum> GeodeticPoint<D> {
    pub fn new(lat: f64, long: f64, height: f64) -> Self {
        Self {
            lat,
            long,
            height,
            datum: PhantomData,
        }
    }

    /// Ellipsoïde de référence du datum
    pub fn ellipsoid(&self) -> &'static Ellipsoid {
        D::ELLIPSOID
    }

    /// Latitude et longitude en radians
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.long.to_radians())
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.long.is_finite() && self.height.is_finite()
    }
}

impl<D: Datum> fmt::Display for GeodeticPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.9} {:.9} {:.3} ({})",
            self.lat,
            self.long,
            self.height,
            D::NAME
        )
    }
}

/// Point en coordonnées cartésiennes géocentriques (mètres)
///
/// Le datum `D` ne sert que de provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPoint<D: Datum> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    datum: PhantomData<D>,
}

impl<D: Datum> GeocentricPoint<D> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            datum: PhantomData,
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Point plan issu d'une projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Abscisse (easting) en mètres
    pub easting: f64,
    /// Ordonnée (northing) en mètres
    pub northing: f64,
}

impl GridPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}
