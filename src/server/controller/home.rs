use axum::{http::StatusCode, response::IntoResponse};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - Always, with an empty body
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Service is up")
    ),
)]
pub async fn home() -> impl IntoResponse {
    StatusCode::OK
}
