use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        camper::{CamperDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        controller::path_id,
        error::{validation::ValidationError, AppError},
        model::{
            camper::{CreateCamperParams, UpdateCamperParams},
            graph::RootedGraph,
            projection::Projection,
        },
        service::camper::CamperService,
        state::AppState,
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

/// Scalar attributes only, used for listings.
const CAMPER_SUMMARY: [&str; 3] = ["id", "name", "age"];

/// Scalars plus one level of signups with their activities.
const CAMPER_DETAIL: [&str; 4] = ["id", "name", "age", "signups"];

/// Attributes echoed back after a partial update.
const CAMPER_UPDATED: [&str; 2] = ["name", "age"];

fn render(rooted: &RootedGraph, projection: &Projection) -> Result<CamperDto, AppError> {
    rooted
        .graph
        .camper_tree(rooted.root, projection)
        .ok_or_else(|| AppError::InternalError(format!("Camper {} missing from graph", rooted.root)))
}

/// List all campers.
///
/// # Returns
/// - `200 OK` - Every camper with `id`, `name` and `age`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campers", body = Vec<CamperDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let graph = CamperService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(graph.campers_tree(&Projection::only(CAMPER_SUMMARY))),
    ))
}

/// Create a camper.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Camper name and age
///
/// # Returns
/// - `201 Created` - The created camper with an empty `signups` list
/// - `400 Bad Request` - Malformed payload, empty name or age outside 8..=18
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let params = CreateCamperParams::from_dto(payload)?;

    let camper = CamperService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(render(&camper, &Projection::only(CAMPER_DETAIL))?),
    ))
}

/// Get a camper with its signups.
///
/// Each signup embeds its activity's scalar attributes. Neither the signups nor the
/// activities embed the camper again.
///
/// # Returns
/// - `200 OK` - The camper with its signups
/// - `404 Not Found` - No camper has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved camper", body = CamperDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, "Camper")?;
    let camper = CamperService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Camper not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(render(&camper, &Projection::only(CAMPER_DETAIL))?),
    ))
}

/// Partially update a camper.
///
/// The camper must exist before the payload is looked at. Omitted fields keep their
/// value, fields sent as `null` are rejected, and a single invalid field rejects the
/// whole update.
///
/// # Returns
/// - `202 Accepted` - The camper's `name` and `age` after the update
/// - `400 Bad Request` - Malformed payload or a field failed validation
/// - `404 Not Found` - No camper has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper id")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 202, description = "Successfully updated camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorsDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCamperDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, "Camper")?;
    let service = CamperService::new(&state.db);
    let not_found = || AppError::NotFound("Camper not found".to_string());

    if !service.exists(id).await? {
        return Err(not_found());
    }

    let Json(payload) = payload.map_err(ValidationError::from)?;
    let params = UpdateCamperParams::from_dto(payload)?;

    let camper = service.update(id, params).await?.ok_or_else(not_found)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(render(&camper, &Projection::only(CAMPER_UPDATED))?),
    ))
}
