//! # bmn
//!
//! Conversion de coordonnées entre WGS84 et le Bundesmeldenetz autrichien
//! (BMN, datum MGI, ellipsoïde de Bessel, bandes M28 / M31 / M34).
//!
//! ## Features
//!
//! - Changement de datum WGS84 ⇄ MGI par transformation de Helmert (précision ≈ 5 m)
//! - Projection Transverse Mercator directe et inverse
//! - Détermination automatique de la bande méridienne
//! - Parsing et formatage de la représentation texte `"M34 753020.835 341104.125"`
//!
//! Toutes les opérations sont des fonctions pures : le crate ne fait ni I/O
//! ni logging et peut être appelé depuis n'importe quel nombre de threads.
//!
//! ## Usage
//!
//! ```rust
//! use bmn::{to_geodetic, to_grid, BmnCoord, GeodeticPoint, Wgs84};
//!
//! let coord: BmnCoord = "M31 450000 350000".parse()?;
//! let wgs84 = to_geodetic(&coord)?;
//! println!("{:.6} {:.6}", wgs84.lat, wgs84.long);
//!
//! let vienna = GeodeticPoint::<Wgs84>::new(48.208333, 16.372778, 0.0);
//! let bmn = to_grid(&vienna, None)?;
//! assert_eq!(bmn.to_string(), "M34 753020.835 341104.125");
//! # Ok::<(), bmn::BmnError>(())
//! ```

pub mod cartesian;
pub mod convert;
pub mod coord;
pub mod datum;
pub mod ellipsoid;
pub mod error;
pub mod helmert;
pub mod tmerc;
pub mod types;
pub mod zone;

pub use convert::{to_geodetic, to_grid};
pub use coord::BmnCoord;
pub use datum::{Datum, Mgi, Wgs84};
pub use ellipsoid::Ellipsoid;
pub use error::BmnError;
pub use helmert::Helmert;
pub use tmerc::ProjectionOrigin;
pub use types::{GeocentricPoint, GeodeticPoint, GridPoint};
pub use zone::Meridian;
