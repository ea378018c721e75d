use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::JsonDatabase;
use crate::models::NewRecipe;
use crate::services::recipe_service::{self, RecipeFilters};
use crate::utils::AppError;

/// Raw query string of `GET /api/recipes`. Empty values count as absent.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeQuery {
    /// Case-insensitive text in title or description
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Maximum cook time in minutes
    #[serde(rename = "cookTime")]
    pub cook_time: Option<String>,
    /// Minimum rating
    pub rating: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RecipeQuery {
    pub fn into_filters(self) -> Result<RecipeFilters, AppError> {
        let cook_time = present(self.cook_time)
            .map(|v| {
                v.trim()
                    .parse::<i64>()
                    .map_err(|_| AppError::InvalidRequest(format!("cookTime must be an integer, got '{}'", v)))
            })
            .transpose()?;

        let rating = present(self.rating)
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite())
                    .ok_or_else(|| AppError::InvalidRequest(format!("rating must be a number, got '{}'", v)))
            })
            .transpose()?;

        Ok(RecipeFilters {
            search: present(self.search),
            category: present(self.category),
            cook_time,
            rating,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "Recipes",
    params(RecipeQuery),
    responses(
        (status = 200, description = "Recipes matching every supplied filter"),
        (status = 400, description = "Non-numeric cookTime or rating")
    )
)]
pub async fn list_recipes(
    db: web::Data<JsonDatabase>,
    query: web::Query<RecipeQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("📖 GET /recipes - {:?}", query);

    let filters = query.into_inner().into_filters()?;
    let recipes = recipe_service::list_recipes(&db, &filters).await?;

    log::info!("✅ Returning {} recipe(s)", recipes.len());
    Ok(HttpResponse::Ok().json(recipes))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    db: web::Data<JsonDatabase>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📖 GET /recipes/{}", id);

    let recipe = recipe_service::get_recipe(&db, &id).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// Documented shape of a recipe body. Keys beyond these (author, image,
/// ingredients, instructions, tags, ...) are stored as sent.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RecipeBody {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    cook_time: Option<i64>,
    rating: Option<f64>,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "Recipes",
    request_body = RecipeBody,
    responses(
        (status = 201, description = "Recipe stored with generated id and timestamps"),
        (status = 400, description = "Missing, empty or non-JSON body")
    )
)]
pub async fn create_recipe(
    db: web::Data<JsonDatabase>,
    body: web::Json<NewRecipe>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /recipes - title: {}", body.title);

    let new = body.into_inner();
    if new.is_empty() {
        log::warn!("❌ Rejected empty recipe body");
        return Err(AppError::InvalidRequest("Recipe body is empty".to_string()));
    }

    let recipe = recipe_service::create_recipe(&db, new).await?;
    Ok(HttpResponse::Created().json(recipe))
}
