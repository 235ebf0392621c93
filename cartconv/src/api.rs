//! Routes HTTP : /health, {APIRoot}/bmn2wgs84 et {APIRoot}/wgs842bmn

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bmn::{BmnCoord, BmnError, GeodeticPoint, Meridian, Wgs84};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, warn};

use crate::config::Config;

/// Erreur du moteur renvoyée au client
#[derive(Debug)]
pub struct ApiError(BmnError);

impl From<BmnError> for ApiError {
    fn from(e: BmnError) -> Self {
        Self(e)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            BmnError::UnresolvedZone { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        };
        warn!(status = status.as_u16(), error = %self.0, "Conversion refusée");

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Paramètres de /bmn2wgs84
#[derive(Debug, Deserialize)]
pub struct BmnQuery {
    /// Coordonnée BMN au format texte
    pub bmn: String,
    /// Hauteur relative (défaut 0)
    #[serde(default)]
    pub relheight: f64,
}

/// Point WGS84 renvoyé par /bmn2wgs84
#[derive(Debug, Serialize, Deserialize)]
pub struct Wgs84Response {
    pub lat: f64,
    pub long: f64,
    pub height: f64,
}

/// Paramètres de /wgs842bmn
#[derive(Debug, Deserialize)]
pub struct Wgs84Query {
    pub lat: f64,
    pub long: f64,
    #[serde(default)]
    pub height: f64,
    /// Bande forcée (M28, M31, M34) ; déduite de la longitude sinon
    pub meridian: Option<String>,
}

/// Coordonnée BMN renvoyée par /wgs842bmn
#[derive(Debug, Serialize, Deserialize)]
pub struct BmnResponse {
    /// Représentation texte canonique
    pub bmn: String,
    pub meridian: String,
    pub right: f64,
    pub height: f64,
    pub relheight: f64,
}

impl From<BmnCoord> for BmnResponse {
    fn from(c: BmnCoord) -> Self {
        Self {
            bmn: c.to_string(),
            meridian: c.meridian.code().to_string(),
            right: c.right,
            height: c.height,
            relheight: c.rel_height,
        }
    }
}

pub fn router(config: &Config) -> Router {
    let api = Router::new()
        .route("/bmn2wgs84", get(bmn_to_wgs84))
        .route("/wgs842bmn", get(wgs84_to_bmn));

    let prefix = config.api_prefix();
    let app = Router::new().route("/health", get(|| async { "ok" }));

    // axum refuse un nest à la racine
    let app = if prefix.is_empty() {
        app.merge(api)
    } else {
        app.nest(&prefix, api)
    };

    app.fallback_service(ServeDir::new(&config.doc_root))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn bmn_to_wgs84(Query(query): Query<BmnQuery>) -> Result<Json<Wgs84Response>, ApiError> {
    debug!(bmn = %query.bmn, relheight = query.relheight, "BMN → WGS84");

    let mut coord = BmnCoord::parse(&query.bmn)?;
    coord.rel_height = query.relheight;

    let p = bmn::to_geodetic(&coord)?;
    Ok(Json(Wgs84Response {
        lat: p.lat,
        long: p.long,
        height: p.height,
    }))
}

async fn wgs84_to_bmn(Query(query): Query<Wgs84Query>) -> Result<Json<BmnResponse>, ApiError> {
    debug!(lat = query.lat, long = query.long, meridian = ?query.meridian, "WGS84 → BMN");

    let meridian = query
        .meridian
        .as_deref()
        .map(str::parse::<Meridian>)
        .transpose()?;

    let p = GeodeticPoint::<Wgs84>::new(query.lat, query.long, query.height);
    let coord = bmn::to_grid(&p, meridian)?;
    Ok(Json(coord.into()))
}
