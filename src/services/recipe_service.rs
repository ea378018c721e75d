use crate::{
    database::JsonDatabase,
    models::{NewRecipe, Recipe},
    utils::{next_id, AppError},
};

pub const COLLECTION: &str = "recipes";

/// Optional predicates for `GET /api/recipes`. All present filters must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilters {
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
    pub category: Option<String>,
    /// Maximum cook time in minutes
    pub cook_time: Option<i64>,
    /// Minimum rating
    pub rating: Option<f64>,
}

impl RecipeFilters {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !recipe.title.to_lowercase().contains(&needle)
                && !recipe.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if recipe.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(max_cook_time) = self.cook_time {
            if recipe.cook_time.unwrap_or(0) > max_cook_time {
                return false;
            }
        }

        if let Some(min_rating) = self.rating {
            if recipe.rating.unwrap_or(0.0) < min_rating {
                return false;
            }
        }

        true
    }
}

pub async fn list_recipes(db: &JsonDatabase, filters: &RecipeFilters) -> Result<Vec<Recipe>, AppError> {
    let mut recipes = db.collection::<Recipe>(COLLECTION).read_all().await?;
    recipes.retain(|recipe| filters.matches(recipe));
    Ok(recipes)
}

pub async fn get_recipe(db: &JsonDatabase, id: &str) -> Result<Recipe, AppError> {
    db.collection::<Recipe>(COLLECTION)
        .read_all()
        .await?
        .into_iter()
        .find(|recipe| recipe.id == id)
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
}

pub async fn create_recipe(db: &JsonDatabase, new: NewRecipe) -> Result<Recipe, AppError> {
    let recipe = db
        .collection::<Recipe>(COLLECTION)
        .mutate(|recipes| {
            let id = next_id(recipes.iter().map(|r| r.id.as_str()));
            let recipe = Recipe::from_new(new, id, chrono::Utc::now());
            recipes.push(recipe.clone());
            Ok(recipe)
        })
        .await?;

    log::info!("✅ Recipe created: {} ({})", recipe.id, recipe.title);

    Ok(recipe)
}

/// Placeholder for per-user authored recipes: the first two recipes,
/// whoever asks.
pub async fn user_recipes(db: &JsonDatabase, _user_id: &str) -> Result<Vec<Recipe>, AppError> {
    let mut recipes = db.collection::<Recipe>(COLLECTION).read_all().await?;
    recipes.truncate(2);
    Ok(recipes)
}

/// Placeholder for per-user favorites: recipes 3 to 5, and nothing at all
/// until five recipes exist.
pub async fn user_favorites(db: &JsonDatabase, _user_id: &str) -> Result<Vec<Recipe>, AppError> {
    let recipes = db.collection::<Recipe>(COLLECTION).read_all().await?;

    if recipes.len() < 5 {
        return Ok(Vec::new());
    }

    Ok(recipes.into_iter().skip(2).take(3).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::temp_database;
    use serde_json::json;

    fn recipe(value: serde_json::Value) -> Recipe {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(json!({ "id": "1", "title": "Tomato Soup", "description": "Warm and simple", "category": "Soup", "cookTime": 20, "rating": 4.5 })),
            recipe(json!({ "id": "2", "title": "Pancakes", "description": "Fluffy breakfast stack", "category": "Breakfast", "cookTime": 15, "rating": 4.8 })),
            recipe(json!({ "id": "3", "title": "Beef Stew", "description": "Slow cooked, tomato base", "category": "Dinner", "cookTime": 120, "rating": 4.2 })),
            recipe(json!({ "id": "4", "title": "Green Salad", "description": "Crisp", "category": "Salad" })),
            recipe(json!({ "id": "5", "title": "Chili", "description": "Spicy", "category": "Dinner", "cookTime": 60, "rating": 3.9 })),
        ]
    }

    async fn seeded() -> (tempfile::TempDir, JsonDatabase) {
        let (dir, db) = temp_database().await;
        db.collection::<Recipe>(COLLECTION).write_all(&sample()).await.unwrap();
        (dir, db)
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[actix_rt::test]
    async fn test_cook_time_filter() {
        let (_dir, db) = temp_database().await;
        let path = db.collection::<Recipe>(COLLECTION).path().to_path_buf();
        std::fs::write(&path, r#"[{"id":"1","title":"Soup","cookTime":20,"rating":4.5}]"#).unwrap();

        let within = RecipeFilters { cook_time: Some(30), ..Default::default() };
        assert_eq!(ids(&list_recipes(&db, &within).await.unwrap()), vec!["1"]);

        let too_short = RecipeFilters { cook_time: Some(10), ..Default::default() };
        assert!(list_recipes(&db, &too_short).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_search_matches_title_or_description_case_insensitively() {
        let (_dir, db) = seeded().await;

        let filters = RecipeFilters { search: Some("TOMATO".into()), ..Default::default() };
        assert_eq!(ids(&list_recipes(&db, &filters).await.unwrap()), vec!["1", "3"]);
    }

    #[actix_rt::test]
    async fn test_category_is_exact() {
        let (_dir, db) = seeded().await;

        let filters = RecipeFilters { category: Some("dinner".into()), ..Default::default() };
        assert!(list_recipes(&db, &filters).await.unwrap().is_empty());

        let filters = RecipeFilters { category: Some("Dinner".into()), ..Default::default() };
        assert_eq!(ids(&list_recipes(&db, &filters).await.unwrap()), vec!["3", "5"]);
    }

    #[actix_rt::test]
    async fn test_missing_numbers_count_as_zero() {
        let (_dir, db) = seeded().await;

        // Green Salad has neither cookTime nor rating
        let quick = RecipeFilters { cook_time: Some(0), ..Default::default() };
        assert_eq!(ids(&list_recipes(&db, &quick).await.unwrap()), vec!["4"]);

        let rated = RecipeFilters { rating: Some(0.1), ..Default::default() };
        assert!(!ids(&list_recipes(&db, &rated).await.unwrap()).contains(&"4"));
    }

    #[actix_rt::test]
    async fn test_filters_compose_as_and() {
        let (_dir, db) = seeded().await;
        let all = sample();

        let combos = [
            RecipeFilters::default(),
            RecipeFilters { search: Some("s".into()), rating: Some(4.0), ..Default::default() },
            RecipeFilters { category: Some("Dinner".into()), cook_time: Some(90), ..Default::default() },
            RecipeFilters { search: Some("o".into()), category: Some("Soup".into()), cook_time: Some(30), rating: Some(4.5) },
        ];

        for filters in combos {
            let result = list_recipes(&db, &filters).await.unwrap();
            for found in &result {
                assert!(all.contains(found));
                assert!(filters.matches(found));
            }
            let expected = all.iter().filter(|r| filters.matches(r)).count();
            assert_eq!(result.len(), expected);
        }

        let both = RecipeFilters { category: Some("Dinner".into()), cook_time: Some(90), ..Default::default() };
        assert_eq!(ids(&list_recipes(&db, &both).await.unwrap()), vec!["5"]);
    }

    #[actix_rt::test]
    async fn test_create_then_get() {
        let (_dir, db) = seeded().await;

        let new: NewRecipe = serde_json::from_value(json!({
            "title": "Omelette",
            "cookTime": 10,
            "ingredients": [{ "name": "egg", "amount": 3, "unit": "pcs" }]
        }))
        .unwrap();

        let created = create_recipe(&db, new).await.unwrap();
        assert_eq!(created.id, "6");

        let fetched = get_recipe(&db, "6").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.extra["ingredients"][0]["name"], "egg");
    }

    #[actix_rt::test]
    async fn test_create_on_empty_store() {
        let (_dir, db) = temp_database().await;

        let created = create_recipe(&db, NewRecipe { title: "First".into(), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(created.id, "1");
        assert_eq!(db.collection::<Recipe>(COLLECTION).read_all().await.unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn test_create_keeps_existing_timestamps() {
        let (_dir, db) = temp_database().await;
        let path = db.collection::<Recipe>(COLLECTION).path().to_path_buf();
        std::fs::write(
            &path,
            r#"[{"id":"1","title":"Stew","createdAt":"2025-07-20T10:00:00.123456","updatedAt":"2025-07-20T10:00:00.123456"}]"#,
        )
        .unwrap();

        let created = create_recipe(&db, NewRecipe { title: "Toast".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(created.id, "2");
        assert!(created.created_at.is_some());

        let stored: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored[0]["createdAt"], "2025-07-20T10:00:00.123456");
        assert_eq!(stored[0]["updatedAt"], "2025-07-20T10:00:00.123456");
    }

    #[actix_rt::test]
    async fn test_get_unknown_is_not_found() {
        let (_dir, db) = seeded().await;
        assert!(matches!(get_recipe(&db, "42").await, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn test_user_stubs() {
        let (_dir, db) = seeded().await;

        assert_eq!(ids(&user_recipes(&db, "anyone").await.unwrap()), vec!["1", "2"]);
        assert_eq!(ids(&user_favorites(&db, "anyone").await.unwrap()), vec!["3", "4", "5"]);

        let (_dir, small) = temp_database().await;
        small.collection::<Recipe>(COLLECTION).write_all(&sample()[..4]).await.unwrap();
        assert!(user_favorites(&small, "1").await.unwrap().is_empty());
        assert_eq!(user_recipes(&small, "1").await.unwrap().len(), 2);
    }
}
