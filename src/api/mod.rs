pub mod auth;
pub mod health;
pub mod meal_plans;
pub mod metrics;
pub mod recipes;
pub mod swagger;
pub mod users;

use actix_web::web;

use crate::utils::AppError;

/// Malformed, missing or incomplete JSON bodies all become a 400 with the
/// usual error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("❌ Rejected body on {} {}: {}", req.method(), req.path(), err);
        AppError::InvalidRequest(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

/// Registers every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/recipes")
                        .route(web::get().to(recipes::list_recipes))
                        .route(web::post().to(recipes::create_recipe)),
                )
                .route("/recipes/{id}", web::get().to(recipes::get_recipe))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login)),
                )
                .route("/meal-plans", web::post().to(meal_plans::create_meal_plan))
                // GET takes a user id, DELETE a meal plan id
                .service(
                    web::resource("/meal-plans/{id}")
                        .route(web::get().to(meal_plans::list_meal_plans))
                        .route(web::delete().to(meal_plans::delete_meal_plan)),
                )
                .service(
                    web::scope("/user")
                        .route("/recipes/{user_id}", web::get().to(users::get_user_recipes))
                        .route("/favorites/{user_id}", web::get().to(users::get_user_favorites)),
                ),
        );
}
