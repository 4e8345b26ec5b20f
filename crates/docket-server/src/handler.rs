use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{Method, Uri};
use axum::response::Json;
use docket_service::{decode_item_input, parse_item_id, ItemService, ServiceError};
use docket_types::{Actor, HydratedItem, ItemId};
use serde_json::json;

use crate::error::{ApiError, ApiResult};

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_actors(State(service): State<ItemService>) -> Json<Vec<Actor>> {
    Json(service.actors().iter().cloned().collect())
}

// Bodies are decoded by hand so that a missing content type is not an error.
// Extractor rejections are taken as values so they report as `BadInput`
// through `ApiError` instead of axum's plain-text responses.

fn body_bytes(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ServiceError> {
    body.map_err(|rejection| ServiceError::BadInput(rejection.body_text()))
}

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<ItemId, ServiceError> {
    let Path(raw_id) = path.map_err(|rejection| ServiceError::BadInput(rejection.body_text()))?;
    parse_item_id(&raw_id)
}

pub async fn create_item(
    State(service): State<ItemService>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<HydratedItem>> {
    let input = decode_item_input(&body_bytes(body)?)?;
    Ok(Json(service.create(input)?))
}

pub async fn list_items(State(service): State<ItemService>) -> ApiResult<Json<Vec<HydratedItem>>> {
    Ok(Json(service.list()?))
}

pub async fn get_item(
    State(service): State<ItemService>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<HydratedItem>> {
    let id = path_id(path)?;
    Ok(Json(service.get(id)?))
}

pub async fn update_item(
    State(service): State<ItemService>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<HydratedItem>> {
    let input = decode_item_input(&body_bytes(body)?)?;
    let id = path_id(path)?;
    Ok(Json(service.update(id, input)?))
}

/// Fallback for any method/path pair no route answers.
pub async fn unknown_route(method: Method, uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    ServiceError::unknown_route(method.as_str(), path).into()
}
