//! HTTP surface.
//!
//! Every read operation is a GET endpoint nested under the configured API
//! prefix. List paths answer with and without a trailing slash, and every
//! endpoint accepts an optional `source` query parameter.

mod entities;
mod graph;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::Context;
use crate::filter::SourceFilter;

/// Path of the GeoJSON alias, outside the API prefix.
pub const GEOJSON_ALIAS: &str = "/api/geojson";

/// The `?source=` query parameter. An empty value means unfiltered.
#[derive(Debug, Default, Deserialize)]
pub struct SourceQuery {
    pub source: Option<String>,
}

impl SourceQuery {
    pub fn filter(&self) -> SourceFilter {
        SourceFilter::new(self.source.as_deref())
    }
}

/// Builds the application router over a loaded context.
pub fn router(ctx: Context) -> Router {
    let prefix = ctx.config.server.api_prefix.trim_end_matches('/').to_string();
    let cors = cors_layer(&ctx.config.server.cors_origins);

    let mut app = if prefix.is_empty() {
        api_routes()
    } else {
        Router::new().nest(&prefix, api_routes())
    };
    if format!("{prefix}/geojson") != GEOJSON_ALIAS {
        app = app.route(GEOJSON_ALIAS, get(graph::geojson));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

fn api_routes() -> Router<Context> {
    Router::new()
        .route("/persons", get(entities::list_persons))
        .route("/persons/", get(entities::list_persons))
        .route("/persons/{id}", get(entities::person_detail))
        .route("/works", get(entities::list_works))
        .route("/works/", get(entities::list_works))
        .route("/works/{id}", get(entities::work_detail))
        .route("/places", get(entities::list_places))
        .route("/places/", get(entities::list_places))
        .route("/places/geojson", get(graph::geojson))
        .route("/places/{id}", get(entities::place_detail))
        .route("/subjects", get(entities::list_subjects))
        .route("/subjects/", get(entities::list_subjects))
        .route("/subjects/{id}", get(entities::subject_detail))
        .route("/languages", get(entities::list_languages))
        .route("/languages/", get(entities::list_languages))
        .route("/languages/{id}", get(entities::language_detail))
        .route("/scholarly", get(entities::list_scholarly))
        .route("/scholarly/", get(entities::list_scholarly))
        .route("/scholarly/{id}", get(entities::scholarly_detail))
        .route("/sources", get(entities::list_sources))
        .route("/sources/", get(entities::list_sources))
        .route("/network", get(graph::network))
        .route("/network/", get(graph::network))
        .route("/ontology", get(graph::ontology))
        .route("/ontology/", get(graph::ontology))
        .route("/ontology/audit", get(graph::ontology_audit))
        .route("/stats", get(graph::stats))
        .route("/geojson", get(graph::geojson))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
