//! Définitions des ellipsoïdes

/// Ellipsoïde de référence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Nom usuel
    pub name: &'static str,
    /// Demi-grand axe (rayon équatorial) en mètres
    pub a: f64,
    /// Aplatissement
    pub f: f64,
}

impl Ellipsoid {
    /// Ellipsoïde WGS84
    pub const WGS84: Ellipsoid = Ellipsoid::new("WGS84", 6378137.0, 1.0 / 298.257223563);

    /// Ellipsoïde de Bessel 1841 (datum MGI, Bundesmeldenetz)
    pub const BESSEL: Ellipsoid = Ellipsoid::new("Bessel 1841", 6377397.155, 1.0 / 299.1528128);

    pub const fn new(name: &'static str, a: f64, f: f64) -> Self {
        Self { name, a, f }
    }

    /// Demi-petit axe (rayon polaire) en mètres
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// Première excentricité au carré
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Première excentricité
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Deuxième excentricité au carré
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Grande normale (rayon de courbure dans le premier vertical), latitude en radians
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1.0 - self.eccentricity_squared() * lat.sin().powi(2)).sqrt()
    }

    /// Rayon de courbure du méridien, latitude en radians
    pub fn meridional_radius(&self, lat: f64) -> f64 {
        let e2 = self.eccentricity_squared();
        self.a * (1.0 - e2) / (1.0 - e2 * lat.sin().powi(2)).powf(1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_constants() {
        let el = Ellipsoid::WGS84;
        assert!((el.eccentricity() - 0.0818191908426215).abs() < 1e-15);
        assert!((el.semiminor_axis() - 6356752.314245).abs() < 1e-3);
    }

    #[test]
    fn test_bessel_constants() {
        let el = Ellipsoid::BESSEL;
        assert!((el.eccentricity_squared() - 0.006674372231802).abs() < 1e-12);
        assert!((el.semiminor_axis() - 6356078.962818).abs() < 1e-3);
    }

    #[test]
    fn test_radii_at_equator_and_pole() {
        let el = Ellipsoid::BESSEL;
        assert!((el.prime_vertical_radius(0.0) - el.a).abs() < 1e-6);
        // Au pôle, les deux rayons sont égaux à a²/b
        let pole = std::f64::consts::FRAC_PI_2;
        let expected = el.a * el.a / el.semiminor_axis();
        assert!((el.prime_vertical_radius(pole) - expected).abs() < 1e-6);
        assert!((el.meridional_radius(pole) - expected).abs() < 1e-6);
    }
}
