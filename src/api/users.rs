//! Per-user recipe shelves. Both are placeholders that ignore the user id
//! and slice the shared recipe list.

use actix_web::{web, HttpResponse};

use crate::database::JsonDatabase;
use crate::services::recipe_service;
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/api/user/recipes/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "Ignored")),
    responses((status = 200, description = "First two recipes"))
)]
pub async fn get_user_recipes(
    db: web::Data<JsonDatabase>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("👤 GET /user/recipes/{}", user_id);

    let recipes = recipe_service::user_recipes(&db, &user_id).await?;
    Ok(HttpResponse::Ok().json(recipes))
}

#[utoipa::path(
    get,
    path = "/api/user/favorites/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "Ignored")),
    responses((status = 200, description = "Recipes 3 to 5, or none when fewer than five exist"))
)]
pub async fn get_user_favorites(
    db: web::Data<JsonDatabase>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("⭐ GET /user/favorites/{}", user_id);

    let recipes = recipe_service::user_favorites(&db, &user_id).await?;
    Ok(HttpResponse::Ok().json(recipes))
}
