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
        activity::{ActivityDto, CreateActivityDto},
        api::{ErrorDto, ValidationErrorsDto},
    },
    server::{
        controller::path_id,
        error::{validation::ValidationError, AppError},
        model::{activity::CreateActivityParams, projection::Projection},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

const ACTIVITY_SUMMARY: [&str; 3] = ["id", "name", "difficulty"];

const ACTIVITY_DETAIL: [&str; 4] = ["id", "name", "difficulty", "signups"];

/// List all activities.
///
/// # Returns
/// - `200 OK` - Every activity with `id`, `name` and `difficulty`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let graph = ActivityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(graph.activities_tree(&Projection::only(ACTIVITY_SUMMARY))),
    ))
}

/// Create an activity.
///
/// # Returns
/// - `201 Created` - The created activity with an empty `signups` list
/// - `400 Bad Request` - Malformed payload, empty name or difficulty outside 0..=10
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/activities",
    tag = ACTIVITY_TAG,
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Successfully created activity", body = ActivityDto),
        (status = 400, description = "Invalid activity data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<CreateActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let params = CreateActivityParams::from_dto(payload)?;

    let activity = ActivityService::new(&state.db).create(params).await?;
    let dto = activity
        .graph
        .activity_tree(activity.root, &Projection::only(ACTIVITY_DETAIL))
        .ok_or_else(|| {
            AppError::InternalError(format!("Activity {} missing from graph", activity.root))
        })?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Delete an activity and all of its signups.
///
/// # Returns
/// - `204 No Content` - The activity and its signups were deleted
/// - `404 Not Found` - No activity has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    responses(
        (status = 204, description = "Successfully deleted activity"),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path, "Activity")?;

    if !ActivityService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Activity not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
