use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use service::product::ProductService;
use service::storage::{MemoryProductStorage, MemoryUserStorage, ProductStorage, UserStorage};
use service::user::{domain::Credentials, AuthConfig, UserService};

use crate::errors::JsonApiError;
use crate::extract::FormOrJson;

/// Shared handler state. Services sit behind trait objects so the storage
/// backend can be swapped without touching the routes.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService<dyn UserStorage>>,
    pub products: Arc<ProductService<dyn ProductStorage>>,
}

impl ServerState {
    /// State backed by the in-memory stores.
    pub fn new(auth: AuthConfig) -> Self {
        Self::with_storage(Arc::new(MemoryUserStorage::new()), Arc::new(MemoryProductStorage::new()), auth)
    }

    pub fn with_storage(users: Arc<dyn UserStorage>, products: Arc<dyn ProductStorage>, auth: AuthConfig) -> Self {
        Self {
            users: Arc::new(UserService::new(users, auth)),
            products: Arc::new(ProductService::new(products)),
        }
    }
}

/// Registration and login body. Both fields are required.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    fn into_credentials(self) -> Result<Credentials, JsonApiError> {
        if self.email.is_empty() {
            return Err(JsonApiError::bad_request("parse request: email is required"));
        }
        if self.password.is_empty() {
            return Err(JsonApiError::bad_request("parse request: password is required"));
        }
        Ok(Credentials::new(self.email, self.password))
    }
}

#[derive(Serialize)]
pub struct LoginOutput { pub token: String }

#[utoipa::path(post, path = "/api/register", tag = "auth", request_body = crate::openapi::CredentialsDoc, responses((status = 201, description = "Registered"), (status = 400, description = "Bad Request or user already exist")))]
pub async fn register(
    State(state): State<ServerState>,
    FormOrJson(input): FormOrJson<AuthRequest>,
) -> Result<StatusCode, JsonApiError> {
    let credentials = input.into_credentials()?;
    info!(email = %credentials.email, "register user");
    state.users.create_user(credentials).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth", request_body = crate::openapi::CredentialsDoc, responses((status = 200, description = "Logged In", body = crate::openapi::LoginOutputDoc), (status = 400, description = "Bad Request or user invalid")))]
pub async fn login(
    State(state): State<ServerState>,
    FormOrJson(input): FormOrJson<AuthRequest>,
) -> Result<Json<LoginOutput>, JsonApiError> {
    let credentials = input.into_credentials()?;
    info!(email = %credentials.email, "user login");
    let login = state.users.login(credentials).await?;
    Ok(Json(LoginOutput { token: login.token }))
}

/// Pull the token out of `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Reject requests without a validly signed bearer token (401).
/// Verified claims are stored in the request extensions for the item handlers.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let Some(token) = bearer_token(&req).map(str::to_owned) else {
        warn!(path = %req.uri().path(), "missing or malformed Authorization header");
        return Err(JsonApiError::unauthorized());
    };

    let claims = state.users.validate_token(&token).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
