//! Entity list and detail handlers.

use axum::extract::{Path, Query, State};
use axum::Json;

use super::SourceQuery;
use crate::context::Context;
use crate::error::AppError;
use crate::models::{
    LanguageDetail, LanguageListItem, PersonDetail, PersonListItem, PlaceDetail, PlaceListItem,
    ScholarlyDetail, ScholarlyListItem, SourceItem, SubjectDetail, SubjectListItem, WorkDetail,
    WorkListItem,
};
use crate::services::{
    LanguageService, PersonService, PlaceService, ScholarlyService, SourceService,
    SubjectService, WorkService,
};

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn list_persons(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<PersonListItem>> {
    let service: PersonService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn person_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<PersonDetail> {
    let service: PersonService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

pub async fn list_works(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<WorkListItem>> {
    let service: WorkService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn work_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<WorkDetail> {
    let service: WorkService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

pub async fn list_places(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<PlaceListItem>> {
    let service: PlaceService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn place_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<PlaceDetail> {
    let service: PlaceService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

pub async fn list_subjects(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<SubjectListItem>> {
    let service: SubjectService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn subject_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<SubjectDetail> {
    let service: SubjectService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

pub async fn list_languages(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<LanguageListItem>> {
    let service: LanguageService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn language_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<LanguageDetail> {
    let service: LanguageService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

pub async fn list_scholarly(
    State(ctx): State<Context>,
    Query(query): Query<SourceQuery>,
) -> ApiResult<Vec<ScholarlyListItem>> {
    let service: ScholarlyService = ctx.resolve();
    Ok(Json(service.list(&query.filter()).await?))
}

pub async fn scholarly_detail(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> ApiResult<ScholarlyDetail> {
    let service: ScholarlyService = ctx.resolve();
    Ok(Json(service.detail(&id).await?))
}

/// Sources are never filtered.
pub async fn list_sources(State(ctx): State<Context>) -> ApiResult<Vec<SourceItem>> {
    let service: SourceService = ctx.resolve();
    Ok(Json(service.list().await?))
}
