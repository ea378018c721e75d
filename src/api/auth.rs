use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::database::JsonDatabase;
use crate::models::{LoginRequest, RegisterRequest, UserInfo};
use crate::services::auth_service;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = UserInfo),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn register(
    db: web::Data<JsonDatabase>,
    config: web::Data<AppConfig>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/register - email: {}", request.email);

    match auth_service::register(&db, &request, config.bcrypt_cost).await {
        Ok(user) => {
            log::info!("✅ Registration successful: {}", request.email);
            HttpResponse::Created().json(user)
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            actix_web::ResponseError::error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserInfo),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    db: web::Data<JsonDatabase>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔐 POST /auth/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(user) => {
            log::info!("✅ Login successful: {}", request.email);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            Err(e)
        }
    }
}
