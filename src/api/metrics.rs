use actix_web::{web, HttpResponse};
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::database::JsonDatabase;
use crate::models::{MealPlan, Recipe, User};
use crate::services::{auth_service, meal_plan_service, recipe_service};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

async fn collection_sizes(db: &JsonDatabase) -> Vec<(&'static str, Option<usize>)> {
    let recipes = db.collection::<Recipe>(recipe_service::COLLECTION).read_all().await;
    let users = db.collection::<User>(auth_service::COLLECTION).read_all().await;
    let meal_plans = db.collection::<MealPlan>(meal_plan_service::COLLECTION).read_all().await;

    vec![
        (recipe_service::COLLECTION, recipes.map(|r| r.len()).ok()),
        (auth_service::COLLECTION, users.map(|u| u.len()).ok()),
        (meal_plan_service::COLLECTION, meal_plans.map(|m| m.len()).ok()),
    ]
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition")
    )
)]
pub async fn get_metrics(db: web::Data<JsonDatabase>) -> HttpResponse {
    let requests = REQUEST_COUNT.load(Ordering::Relaxed);
    let errors = ERROR_COUNT.load(Ordering::Relaxed);

    let mut metrics = format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP errors\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n\
         \n\
         # HELP collection_records Records stored per collection file\n\
         # TYPE collection_records gauge\n",
        requests, errors
    );

    // An unreadable collection is left out rather than reported as zero
    for (name, size) in collection_sizes(&db).await {
        match size {
            Some(n) => {
                let _ = writeln!(metrics, "collection_records{{collection=\"{}\"}} {}", name, n);
            }
            None => log::warn!("⚠️  Metrics: collection {} unreadable", name),
        }
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics)
}
