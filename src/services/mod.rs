pub mod auth_service;
pub mod recipe_service;
pub mod meal_plan_service;
