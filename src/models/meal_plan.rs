use serde::{Deserialize, Serialize};

use super::Recipe;

/// Scheduled meal. `recipe` is a snapshot taken at creation and is never
/// refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub user_id: String,
    pub date: String,
    /// breakfast, lunch, dinner or snack by convention; not checked
    pub meal_type: String,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlanRequest {
    pub user_id: String,
    pub recipe_id: String,
    pub date: String,
    pub meal_type: String,
}
