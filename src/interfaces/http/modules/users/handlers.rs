//! User API handlers
//!
//! Delegates to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, GetUserByIdRequest, ListUsersParams, UserDto};
use crate::application::UserService;
use crate::infrastructure::SeaOrmUserRepository;
use crate::interfaces::http::common::{ApiError, ErrorResponse, ValidatedJson};

/// User handler state — concrete over `SeaOrmUserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<SeaOrmUserRepository>>,
}

#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid data or duplicate name/email", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state.user_service.create_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Users in store order", body = Vec<UserDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    params: Result<Query<ListUsersParams>, QueryRejection>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let Query(params) = params?;
    let users = state.user_service.list_users(params.into()).await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/users/get_by_id/",
    tag = "Users",
    request_body = GetUserByIdRequest,
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_user_by_id(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<GetUserByIdRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.get_user_by_id(request.user_id).await?;
    Ok(Json(UserDto::from(user)))
}
