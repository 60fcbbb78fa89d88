use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{CurrentUser, require_bearer};
use crate::dto::{
    AuthResponse, CreateUserRequest, HealthResponse, LoginRequest, RegisterRequest,
    UpdateUserRequest, UserResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

type JsonBody<T> = Result<axum::Json<T>, JsonRejection>;
type IdPath = Result<Path<u64>, PathRejection>;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .merge(SwaggerUi::new("/api-docs").url("/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Missing email or password", body = crate::dto::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let axum::Json(body) = body?;
    let session = state
        .auth
        .login(body.email.as_deref(), body.password.as_deref())
        .await?;

    Ok(axum::Json(AuthResponse::from(session)))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = AuthResponse),
        (status = 400, description = "Missing field or email already registered", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let axum::Json(body) = body?;
    let session = state
        .auth
        .register(
            body.name.as_deref(),
            body.email.as_deref(),
            body.password.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, axum::Json(AuthResponse::from(session))))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated user", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account no longer exists", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.auth.current_user(identity.user_id).await?;
    Ok(axum::Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: IdPath,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let user = state.users.get(id).await?;
    Ok(axum::Json(UserResponse::from(user)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let axum::Json(body) = body?;
    let user = state.users.create(body.name, body.email).await?;
    Ok((StatusCode::CREATED, axum::Json(UserResponse::from(user))))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    id: IdPath,
    body: JsonBody<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let axum::Json(body) = body?;
    let user = state.users.update(id, body.into()).await?;
    Ok(axum::Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted, or did not exist"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    id: IdPath,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        users: state.store.len().await,
    };

    axum::Json(response)
}
