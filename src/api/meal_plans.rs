use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::database::JsonDatabase;
use crate::models::CreateMealPlanRequest;
use crate::services::meal_plan_service;
use crate::utils::AppError;

#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/meal-plans/{user_id}",
    tag = "Meal Plans",
    params(("user_id" = String, Path, description = "Owner of the meal plans")),
    responses(
        (status = 200, description = "The user's meal plans, each with its recipe snapshot")
    )
)]
pub async fn list_meal_plans(
    db: web::Data<JsonDatabase>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("📅 GET /meal-plans/{}", user_id);

    let plans = meal_plan_service::list_meal_plans(&db, &user_id).await?;
    Ok(HttpResponse::Ok().json(plans))
}

#[utoipa::path(
    post,
    path = "/api/meal-plans",
    tag = "Meal Plans",
    request_body = CreateMealPlanRequest,
    responses(
        (status = 201, description = "Meal plan created"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn create_meal_plan(
    db: web::Data<JsonDatabase>,
    request: web::Json<CreateMealPlanRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "📅 POST /meal-plans - user: {}, recipe: {}",
        request.user_id, request.recipe_id
    );

    let plan = meal_plan_service::create_meal_plan(&db, request.into_inner()).await?;
    Ok(HttpResponse::Created().json(plan))
}

#[utoipa::path(
    delete,
    path = "/api/meal-plans/{id}",
    tag = "Meal Plans",
    params(("id" = String, Path, description = "Meal plan id")),
    responses(
        (status = 200, description = "Meal plan removed", body = MessageResponse),
        (status = 404, description = "Meal plan not found")
    )
)]
pub async fn delete_meal_plan(
    db: web::Data<JsonDatabase>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /meal-plans/{}", id);

    match meal_plan_service::delete_meal_plan(&db, &id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            success: true,
            message: "Meal plan removed successfully".to_string(),
        }),
        Err(e) => {
            log::warn!("❌ Delete failed: {} - {}", id, e);
            actix_web::ResponseError::error_response(&e)
        }
    }
}
