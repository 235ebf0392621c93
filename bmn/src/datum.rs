//! Datums géodésiques et changement de datum WGS84 ⇄ MGI
//!
//! Le datum d'un point fait partie de son type : un point WGS84 ne peut pas
//! être passé là où un point MGI est attendu.

use std::fmt::Debug;

use crate::cartesian::{cartesian_to_polar, polar_to_cartesian};
use crate::ellipsoid::Ellipsoid;
use crate::helmert::Helmert;
use crate::types::{GeocentricPoint, GeodeticPoint};

/// Datum géodésique connu à la compilation
pub trait Datum: Debug + Clone + Copy + PartialEq {
    /// Nom du datum
    const NAME: &'static str;
    /// Ellipsoïde de référence
    const ELLIPSOID: &'static Ellipsoid;
}

/// Datum WGS84 (GPS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wgs84;

impl Datum for Wgs84 {
    const NAME: &'static str = "WGS84";
    const ELLIPSOID: &'static Ellipsoid = &Ellipsoid::WGS84;
}

/// Datum MGI (Militärgeographisches Institut), ellipsoïde de Bessel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mgi;

impl Datum for Mgi {
    const NAME: &'static str = "MGI";
    const ELLIPSOID: &'static Ellipsoid = &Ellipsoid::BESSEL;
}

/// Convertit un point WGS84 vers le datum MGI
pub fn wgs84_to_mgi(point: &GeodeticPoint<Wgs84>) -> GeodeticPoint<Mgi> {
    let cart = polar_to_cartesian(point);
    let shifted = Helmert::WGS84_TO_MGI.transform(&cart.to_array());
    cartesian_to_polar(&GeocentricPoint::<Mgi>::from_array(shifted))
}

/// Convertit un point MGI vers le datum WGS84
pub fn mgi_to_wgs84(point: &GeodeticPoint<Mgi>) -> GeodeticPoint<Wgs84> {
    let cart = polar_to_cartesian(point);
    let shifted = Helmert::WGS84_TO_MGI.inverse_transform(&cart.to_array());
    cartesian_to_polar(&GeocentricPoint::<Wgs84>::from_array(shifted))
}
