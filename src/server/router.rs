use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{activity, camper, home, signup},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Camp Registry", description = "Campers, activities and signups"),
    tags(
        (name = "home", description = "Service status"),
        (name = "camper", description = "Camper management"),
        (name = "activity", description = "Activity management"),
        (name = "signup", description = "Signing campers up for activities")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route and the Swagger UI.
///
/// The OpenAPI document is collected from the handlers' `utoipa::path` annotations and
/// served at `/api/docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::home))
        .routes(routes!(camper::get_campers, camper::create_camper))
        .routes(routes!(camper::get_camper_by_id, camper::update_camper))
        .routes(routes!(activity::get_activities, activity::create_activity))
        .routes(routes!(activity::delete_activity))
        .routes(routes!(signup::create_signup))
        .with_state(state)
        .split_for_parts();

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api_doc))
        .layer(TraceLayer::new_for_http())
}
