//! Configuration du service

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Préfixe des routes de l'API
    #[serde(rename = "APIRoot", default = "default_api_root")]
    pub api_root: String,

    /// Répertoire des fichiers statiques (documentation)
    #[serde(rename = "DocRoot", default = "default_doc_root")]
    pub doc_root: String,

    /// Adresse d'écoute, `host:port` ou `:port`
    #[serde(rename = "Binding", default = "default_binding")]
    pub binding: String,
}

fn default_api_root() -> String {
    "api/".to_string()
}

fn default_doc_root() -> String {
    "doc/".to_string()
}

fn default_binding() -> String {
    ":1111".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            doc_root: default_doc_root(),
            binding: default_binding(),
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier JSON
    ///
    /// Un fichier illisible est signalé et les valeurs par défaut sont
    /// conservées ; un JSON invalide est une erreur fatale.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file unreadable, using defaults");
                return Ok(Self::default());
            }
        };

        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse une configuration JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }

    /// Applique les surcharges des variables d'environnement
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("CARTCONV_API_ROOT") {
            self.api_root = v;
        }
        if let Ok(v) = std::env::var("CARTCONV_DOC_ROOT") {
            self.doc_root = v;
        }
        if let Ok(v) = std::env::var("CARTCONV_BINDING") {
            self.binding = v;
        }
    }

    /// Adresse d'écoute utilisable par `TcpListener::bind`
    ///
    /// `:1111` écoute sur toutes les interfaces.
    pub fn bind_addr(&self) -> String {
        if self.binding.starts_with(':') {
            format!("0.0.0.0{}", self.binding)
        } else {
            self.binding.clone()
        }
    }

    /// Préfixe des routes normalisé (`api/` → `/api`, `/` → vide)
    pub fn api_prefix(&self) -> String {
        let trimmed = self.api_root.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
