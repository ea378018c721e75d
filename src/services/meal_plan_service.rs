use crate::{
    database::JsonDatabase,
    models::{CreateMealPlanRequest, MealPlan},
    services::recipe_service,
    utils::{next_id, AppError},
};

pub const COLLECTION: &str = "meal_plans";

pub async fn list_meal_plans(db: &JsonDatabase, user_id: &str) -> Result<Vec<MealPlan>, AppError> {
    let mut plans = db.collection::<MealPlan>(COLLECTION).read_all().await?;
    plans.retain(|plan| plan.user_id == user_id);
    Ok(plans)
}

/// Schedules a recipe, embedding a copy of it as it is right now.
pub async fn create_meal_plan(
    db: &JsonDatabase,
    request: CreateMealPlanRequest,
) -> Result<MealPlan, AppError> {
    let recipe = recipe_service::get_recipe(db, &request.recipe_id).await?;

    let plan = db
        .collection::<MealPlan>(COLLECTION)
        .mutate(|plans| {
            let plan = MealPlan {
                id: next_id(plans.iter().map(|p| p.id.as_str())),
                user_id: request.user_id,
                date: request.date,
                meal_type: request.meal_type,
                recipe,
            };
            plans.push(plan.clone());
            Ok(plan)
        })
        .await?;

    log::info!(
        "✅ Meal plan {} created: user {} / {} {} / recipe {}",
        plan.id, plan.user_id, plan.date, plan.meal_type, plan.recipe.id
    );

    Ok(plan)
}

pub async fn delete_meal_plan(db: &JsonDatabase, id: &str) -> Result<(), AppError> {
    let removed = db
        .collection::<MealPlan>(COLLECTION)
        .mutate(|plans| {
            let before = plans.len();
            plans.retain(|plan| plan.id != id);

            match before - plans.len() {
                0 => Err(AppError::NotFound("Meal plan not found".to_string())),
                removed => Ok(removed),
            }
        })
        .await?;

    log::info!("🗑️ Meal plan {} removed ({} record(s))", id, removed);

    Ok(())
}
