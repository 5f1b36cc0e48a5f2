//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::UserService;
use crate::infrastructure::SeaOrmUserRepository;
use crate::interfaces::http::common::ErrorResponse;
use crate::interfaces::http::modules::{health, metrics, request_id, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::list_users,
        users::get_user_by_id,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            users::UserDto,
            users::CreateUserRequest,
            users::GetUserByIdRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "Create, list and look up users"),
    ),
    info(
        title = "User Service API",
        version = "0.1.0",
        description = "REST API over the users table",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<UserService<SeaOrmUserRepository>>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let user_state = users::UserHandlerState { user_service };

    // Both slash forms are accepted; the trailing-slash one is canonical.
    let user_routes = Router::new()
        .route(
            "/api/users/",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/get_by_id/", post(users::get_user_by_id))
        .route("/api/users/get_by_id", post(users::get_user_by_id))
        .with_state(user_state);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    // CORS configuration: any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .merge(user_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
}
