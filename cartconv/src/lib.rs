//! # cartconv
//!
//! Service REST et outils en ligne de commande autour du crate `bmn`.
//!
//! ## Features
//!
//! - API HTTP (axum) : `/api/bmn2wgs84` et `/api/wgs842bmn`
//! - Configuration JSON compatible (`APIRoot`, `DocRoot`, `Binding`)
//! - Conversion par lot parallélisée (rayon)
//!
//! ## Usage CLI
//!
//! ```bash
//! # Démarrer le service (config.json, :1111 par défaut)
//! cartconv serve --config ./config.json
//!
//! # Conversions unitaires
//! cartconv to-wgs84 "M31 450000 350000"
//! cartconv to-bmn --lat 48.208333 --long 16.372778
//!
//! # Conversion d'un fichier
//! cartconv batch --input points.txt --direction to-bmn
//! ```

pub mod api;
pub mod batch;
pub mod config;

pub use config::Config;
