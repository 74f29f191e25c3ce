use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::{projection::Projection, signup::CreateSignupParams},
        service::signup::SignupService,
        state::AppState,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// Sign a camper up for an activity.
///
/// The response embeds the camper and the activity with their scalar attributes only.
///
/// # Returns
/// - `201 Created` - The created signup
/// - `400 Bad Request` - Malformed payload, time outside 0..=23, or a camper or activity
///   that does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 400, description = "Invalid signup data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;
    let params = CreateSignupParams::from_dto(payload)?;

    let signup = SignupService::new(&state.db).create(params).await?;
    let dto = signup
        .graph
        .signup_tree(signup.root, &Projection::all())
        .ok_or_else(|| AppError::InternalError(format!("Signup {} missing from graph", signup.root)))?;

    Ok((StatusCode::CREATED, Json(dto)))
}
