//! Types d'erreurs pour le crate bmn

use thiserror::Error;

/// Erreurs pouvant survenir lors d'une conversion BMN
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmnError {
    /// Code de méridien inconnu (ni M28, ni M31, ni M34)
    #[error("Unrecognized zone code: {0}")]
    UnrecognizedZoneCode(String),

    /// Valeur numérique illisible
    #[error("Malformed numeral '{token}': {reason}")]
    MalformedNumeral { token: String, reason: String },

    /// Aucune bande méridienne ne couvre cette longitude
    #[error("No meridian stripe covers longitude {longitude}°")]
    UnresolvedZone { longitude: f64 },

    /// Nombre de jetons incorrect dans la représentation texte
    #[error("Malformed coordinate text: expected 3 tokens, found {tokens}")]
    MalformedCoordinateText { tokens: usize },

    /// Coordonnée non finie (NaN ou infinie)
    #[error("Non-finite {0}")]
    NonFiniteCoordinate(&'static str),
}

impl BmnError {
    /// Crée une erreur de valeur numérique avec contexte
    pub fn malformed_numeral(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNumeral {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
