use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Service API",
        version = "1.0.0",
        description = "Recipes, users and meal plans stored as flat JSON collections.\n\n**Features:**\n- Recipe search by text, category, cook time and rating\n- Registration and login (bcrypt-hashed passwords)\n- Meal plans with embedded recipe snapshots\n- Health monitoring and metrics",
        contact(
            name = "Recipe Service Team"
        )
    ),
    paths(
        // Recipes
        crate::api::recipes::list_recipes,
        crate::api::recipes::get_recipe,
        crate::api::recipes::create_recipe,

        // Auth
        crate::api::auth::register,
        crate::api::auth::login,

        // Meal plans
        crate::api::meal_plans::list_meal_plans,
        crate::api::meal_plans::create_meal_plan,
        crate::api::meal_plans::delete_meal_plan,

        // Users
        crate::api::users::get_user_recipes,
        crate::api::users::get_user_favorites,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::RegisterRequest,
            crate::models::LoginRequest,
            crate::models::UserInfo,
            crate::models::CreateMealPlanRequest,
            crate::api::recipes::RecipeBody,
            crate::api::meal_plans::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Recipes", description = "Browse, search and add recipes."),
        (name = "Auth", description = "Email/password registration and login. Responses never include the password."),
        (name = "Meal Plans", description = "Schedule recipes per user and date."),
        (name = "Users", description = "Per-user recipe shelves (placeholder data)."),
        (name = "Health", description = "Health check and metrics for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_domain_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/recipes", "/api/recipes/{id}", "/api/auth/login", "/api/meal-plans/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
