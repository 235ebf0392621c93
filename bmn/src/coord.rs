//! Coordonnée BMN et sa représentation texte
//!
//! Format canonique : `"<MÉRIDIEN> <RIGHT> <HEIGHT>"`, par exemple
//! `"M34 753020.835 341104.125"`.

use std::fmt;
use std::str::FromStr;

use crate::datum::{Datum, Mgi};
use crate::ellipsoid::Ellipsoid;
use crate::error::BmnError;
use crate::zone::Meridian;

/// Nombre de décimales conservées par le formatage (millimètre)
const PRECISION: usize = 3;

/// Coordonnée du Bundesmeldenetz
///
/// L'ellipsoïde de référence est toujours Bessel 1841 (datum MGI).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmnCoord {
    /// Valeur à droite (easting) en mètres
    pub right: f64,
    /// Valeur en hauteur (northing) en mètres
    pub height: f64,
    /// Hauteur relative en mètres
    pub rel_height: f64,
    /// Bande méridienne
    pub meridian: Meridian,
}

impl BmnCoord {
    pub fn new(meridian: Meridian, right: f64, height: f64, rel_height: f64) -> Self {
        Self {
            right,
            height,
            rel_height,
            meridian,
        }
    }

    /// Ellipsoïde de référence du BMN
    pub fn ellipsoid(&self) -> &'static Ellipsoid {
        Mgi::ELLIPSOID
    }

    /// Parse la représentation texte d'une coordonnée BMN
    pub fn parse(text: &str) -> Result<Self, BmnError> {
        text.parse()
    }
}

impl FromStr for BmnCoord {
    type Err = BmnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = s.trim().to_ascii_uppercase();
        let tokens: Vec<&str> = compact.split_whitespace().collect();

        let [code, right, height] = tokens.as_slice() else {
            return Err(BmnError::MalformedCoordinateText {
                tokens: tokens.len(),
            });
        };

        let meridian: Meridian = code.parse()?;
        let right = parse_numeral(right)?;
        let height = parse_numeral(height)?;

        Ok(Self::new(meridian, right, height, 0.0))
    }
}

/// Parse un nombre décimal fini
fn parse_numeral(token: &str) -> Result<f64, BmnError> {
    let value: f64 = fast_float::parse(token)
        .map_err(|e| BmnError::malformed_numeral(token, e.to_string()))?;

    if !value.is_finite() {
        return Err(BmnError::malformed_numeral(token, "value is not finite"));
    }
    Ok(value)
}

/// Formate un nombre au millimètre, sans zéros ni point décimal superflus
fn format_numeral(value: f64) -> String {
    let s = format!("{:.*}", PRECISION, value);
    let s = s.trim_end_matches('0').trim_end_matches('.');

    // "-0.0001" arrondi donne "-0"
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl fmt::Display for BmnCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.meridian,
            format_numeral(self.right),
            format_numeral(self.height)
        )
    }
}
