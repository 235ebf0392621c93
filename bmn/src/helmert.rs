//! Transformation de Helmert à 7 paramètres
//!
//! Convention "position vector" : `P' = T + (1 + s) · R · P` avec la matrice
//! de rotation aux petits angles. L'inverse utilise l'inverse exacte de `R`,
//! pas les paramètres opposés.

/// Secondes d'arc → radians
const ARCSEC: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Similitude 3D entre deux datums géocentriques
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helmert {
    /// Translation en mètres
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// Rotations en secondes d'arc
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Facteur d'échelle en ppm
    pub s: f64,
}

impl Helmert {
    /// WGS84 → MGI (Autriche)
    ///
    /// Précision de l'ordre de quelques mètres sur le territoire autrichien.
    pub const WGS84_TO_MGI: Helmert = Helmert::new(
        -577.326, -90.129, -463.919, -5.137, -1.474, -5.297, -2.4232,
    );

    pub const fn new(tx: f64, ty: f64, tz: f64, rx: f64, ry: f64, rz: f64, s: f64) -> Self {
        Self {
            tx,
            ty,
            tz,
            rx,
            ry,
            rz,
            s,
        }
    }

    fn translation(&self) -> [f64; 3] {
        [self.tx, self.ty, self.tz]
    }

    fn scale(&self) -> f64 {
        1.0 + self.s * 1e-6
    }

    fn rotation(&self) -> [[f64; 3]; 3] {
        let (rx, ry, rz) = (self.rx * ARCSEC, self.ry * ARCSEC, self.rz * ARCSEC);
        [[1.0, -rz, ry], [rz, 1.0, -rx], [-ry, rx, 1.0]]
    }

    /// Applique la transformation
    pub fn transform(&self, p: &[f64; 3]) -> [f64; 3] {
        let r = self.rotation();
        let k = self.scale();
        let t = self.translation();

        let mut out = [0.0; 3];
        for i in 0..3 {
            out[i] = t[i] + k * (r[i][0] * p[0] + r[i][1] * p[1] + r[i][2] * p[2]);
        }
        out
    }

    /// Applique l'inverse algébrique exacte de [`Helmert::transform`]
    pub fn inverse_transform(&self, p: &[f64; 3]) -> [f64; 3] {
        let inv = invert(&self.rotation());
        let k = self.scale();
        let t = self.translation();

        let d = [(p[0] - t[0]) / k, (p[1] - t[1]) / k, (p[2] - t[2]) / k];

        let mut out = [0.0; 3];
        for i in 0..3 {
            out[i] = inv[i][0] * d[0] + inv[i][1] * d[1] + inv[i][2] * d[2];
        }
        out
    }
}

/// Inverse d'une matrice 3x3 par la comatrice
///
/// La matrice de rotation aux petits angles a un déterminant proche de 1.
fn invert(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let [[a, b, c], [d, e, f], [g, h, i]] = *m;

    let det = a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g);

    let adj = [
        [e * i - f * h, c * h - b * i, b * f - c * e],
        [f * g - d * i, a * i - c * g, c * d - a * f],
        [d * h - e * g, b * g - a * h, a * e - b * d],
    ];

    let mut out = [[0.0; 3]; 3];
    for (row, adj_row) in out.iter_mut().zip(adj.iter()) {
        for (v, a) in row.iter_mut().zip(adj_row.iter()) {
            *v = a / det;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_only() {
        let h = Helmert::new(-87.0, -96.0, -120.0, 0.0, 0.0, 0.0, 0.0);
        let out = h.transform(&[4194423.0, 1162702.0, 4647245.0]);
        assert_eq!(out, [4194336.0, 1162606.0, 4647125.0]);
    }

    #[test]
    fn test_roundtrip() {
        let h = Helmert::WGS84_TO_MGI;
        let points = [
            [4194423.0, 1162702.0, 4647245.0],
            [6378137.0, 0.0, 0.0],
            [0.0, 0.0, 6356752.3],
            [-2694044.0, -4266368.0, 3888310.0],
        ];

        for p in &points {
            let back = h.inverse_transform(&h.transform(p));
            for i in 0..3 {
                let tol = 1e-6 * p[i].abs().max(1.0);
                assert!((back[i] - p[i]).abs() < tol, "{:?} -> {:?}", p, back);
            }
        }
    }

    #[test]
    fn test_shift_magnitude() {
        // Le décalage WGS84 → MGI en Autriche est de l'ordre de 750 m
        let h = Helmert::WGS84_TO_MGI;
        let p = [4194423.0, 1162702.0, 4647245.0];
        let out = h.transform(&p);
        let shift = ((out[0] - p[0]).powi(2) + (out[1] - p[1]).powi(2) + (out[2] - p[2]).powi(2)).sqrt();
        assert!(shift > 650.0 && shift < 850.0, "shift={}", shift);
    }
}
