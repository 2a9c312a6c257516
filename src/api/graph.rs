//! Handlers for graph views, GeoJSON and stats.

use axum::extract::{Query, State};
use axum::Json;

use super::SourceQuery;
use crate::context::Context;
use crate::error::AppError;
use crate::models::{FeatureCollection, NetworkData, OntologyAudit, OntologyGraph, Stats};
use crate::services::{GeoService, NetworkService, OntologyService, StatsService};

pub async fn network(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<NetworkData>, AppError> {
    let service: NetworkService = ctx.resolve();
    Ok(Json(service.network(&query.filter()).await?))
}

pub async fn ontology(State(ctx): State<Context>) -> Result<Json<OntologyGraph>, AppError> {
    let service: OntologyService = ctx.resolve();
    Ok(Json(service.graph().await?))
}

pub async fn ontology_audit(State(ctx): State<Context>) -> Result<Json<OntologyAudit>, AppError> {
    let service: OntologyService = ctx.resolve();
    Ok(Json(service.audit().await?))
}

pub async fn geojson(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<FeatureCollection>, AppError> {
    let service: GeoService = ctx.resolve();
    Ok(Json(service.features(&query.filter()).await?))
}

pub async fn stats(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<Stats>, AppError> {
    let service: StatsService = ctx.resolve();
    Ok(Json(service.global(&query.filter()).await?))
}
