use crate::database::JsonDatabase;
use crate::models::{MealPlan, Recipe, User};
use crate::services::{auth_service, meal_plan_service, recipe_service};
use crate::utils::{hash_password, AppError};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Creates any collection file that does not exist yet.
/// Existing files are never touched, even when empty.
pub async fn seed_collections(db: &JsonDatabase, bcrypt_cost: u32) -> Result<(), AppError> {
    let recipes = db.collection::<Recipe>(recipe_service::COLLECTION);
    if recipes.exists().await? {
        log::info!("📋 Recipes: collection file present — skipping seed");
    } else {
        let seed = build_default_recipes(Utc::now());
        recipes.write_all(&seed).await?;
        log::info!("   ✅ Seeded {} recipes into {}", seed.len(), recipes.path().display());
    }

    let users = db.collection::<User>(auth_service::COLLECTION);
    if users.exists().await? {
        log::info!("📋 Users: collection file present — skipping seed");
    } else {
        let test_user = User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "user@example.com".into(),
            password: hash_password("password".into(), bcrypt_cost).await?,
        };
        users.write_all(&[test_user]).await?;
        log::info!("   ✅ Seeded test user user@example.com");
    }

    let meal_plans = db.collection::<MealPlan>(meal_plan_service::COLLECTION);
    if !meal_plans.exists().await? {
        meal_plans.write_all(&[]).await?;
        log::info!("   ✅ Created empty meal plan collection");
    }

    Ok(())
}

fn seed_recipe(now: DateTime<Utc>, fields: Value) -> Result<Recipe, AppError> {
    let mut fields = fields;
    fields["createdAt"] = json!(now);
    fields["updatedAt"] = json!(now);

    serde_json::from_value(fields).map_err(|source| AppError::SerializeError {
        name: recipe_service::COLLECTION.to_string(),
        source,
    })
}

fn build_default_recipes(now: DateTime<Utc>) -> Vec<Recipe> {
    let fields = vec![
        json!({
            "id": "1",
            "title": "Classic Margherita Pizza",
            "description": "A simple pizza with San Marzano tomatoes, fresh mozzarella and basil.",
            "author": "Maria Rossi",
            "image": "https://images.unsplash.com/photo-1604068549290-dea0e4a305ca",
            "category": "Dinner",
            "cookTime": 15,
            "prepTime": 90,
            "difficulty": "Medium",
            "servings": 4,
            "defaultServings": 4,
            "rating": 4.8,
            "reviews": 124,
            "ingredients": [
                { "name": "pizza dough", "amount": 500, "unit": "g" },
                { "name": "crushed tomatoes", "amount": 200, "unit": "g" },
                { "name": "fresh mozzarella", "amount": 250, "unit": "g" },
                { "name": "basil leaves", "amount": 10, "unit": "pcs" }
            ],
            "instructions": [
                "Preheat the oven as hot as it goes.",
                "Stretch the dough and spread the tomatoes.",
                "Top with torn mozzarella and bake until blistered.",
                "Finish with basil and olive oil."
            ],
            "tags": ["italian", "vegetarian"]
        }),
        json!({
            "id": "2",
            "title": "Fluffy Pancakes",
            "description": "Buttermilk pancakes for a slow weekend breakfast.",
            "author": "Sam Baker",
            "image": "https://images.unsplash.com/photo-1528207776546-365bb710ee93",
            "category": "Breakfast",
            "cookTime": 15,
            "prepTime": 10,
            "difficulty": "Easy",
            "servings": 4,
            "defaultServings": 4,
            "rating": 4.6,
            "reviews": 89,
            "ingredients": [
                { "name": "flour", "amount": 200, "unit": "g" },
                { "name": "buttermilk", "amount": 300, "unit": "ml" },
                { "name": "eggs", "amount": 2, "unit": "pcs" }
            ],
            "instructions": [
                "Whisk the dry ingredients.",
                "Fold in buttermilk and eggs; leave a few lumps.",
                "Cook on a buttered pan until bubbles form, then flip."
            ],
            "tags": ["sweet", "quick"]
        }),
        json!({
            "id": "3",
            "title": "Chicken Tikka Masala",
            "description": "Grilled chicken in a creamy spiced tomato sauce.",
            "author": "Priya Patel",
            "image": "https://images.unsplash.com/photo-1565557623262-b51c2513a641",
            "category": "Dinner",
            "cookTime": 40,
            "prepTime": 30,
            "difficulty": "Medium",
            "servings": 4,
            "defaultServings": 4,
            "rating": 4.7,
            "reviews": 203,
            "ingredients": [
                { "name": "chicken thighs", "amount": 700, "unit": "g" },
                { "name": "yogurt", "amount": 150, "unit": "g" },
                { "name": "tomato passata", "amount": 400, "unit": "ml" },
                { "name": "cream", "amount": 100, "unit": "ml" }
            ],
            "instructions": [
                "Marinate the chicken in yogurt and spices.",
                "Grill until charred.",
                "Simmer the sauce, add cream, then the chicken."
            ],
            "tags": ["indian", "spicy"]
        }),
        json!({
            "id": "4",
            "title": "Greek Salad",
            "description": "Tomatoes, cucumber, olives and feta with oregano.",
            "author": "Nikos Georgiou",
            "image": "https://images.unsplash.com/photo-1540420773420-3366772f4999",
            "category": "Salad",
            "cookTime": 0,
            "prepTime": 15,
            "difficulty": "Easy",
            "servings": 2,
            "defaultServings": 2,
            "rating": 4.4,
            "reviews": 57,
            "ingredients": [
                { "name": "tomatoes", "amount": 3, "unit": "pcs" },
                { "name": "cucumber", "amount": 1, "unit": "pcs" },
                { "name": "feta", "amount": 200, "unit": "g" }
            ],
            "instructions": [
                "Chop the vegetables into large chunks.",
                "Top with feta, olives, oregano and olive oil."
            ],
            "tags": ["vegetarian", "no-cook"]
        }),
        json!({
            "id": "5",
            "title": "Beef Chili",
            "description": "A thick, smoky chili that tastes better the next day.",
            "author": "Dan Miller",
            "image": "https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd",
            "category": "Dinner",
            "cookTime": 120,
            "prepTime": 20,
            "difficulty": "Medium",
            "servings": 6,
            "defaultServings": 6,
            "rating": 4.5,
            "reviews": 142,
            "ingredients": [
                { "name": "ground beef", "amount": 800, "unit": "g" },
                { "name": "kidney beans", "amount": 400, "unit": "g" },
                { "name": "chipotle in adobo", "amount": 2, "unit": "pcs" }
            ],
            "instructions": [
                "Brown the beef in batches.",
                "Add aromatics, spices and tomatoes.",
                "Simmer low for two hours, adding beans near the end."
            ],
            "tags": ["hearty", "make-ahead"]
        }),
        json!({
            "id": "6",
            "title": "Chocolate Chip Cookies",
            "description": "Crisp edges, chewy centers, browned butter.",
            "author": "Sam Baker",
            "image": "https://images.unsplash.com/photo-1499636136210-6f4ee915583e",
            "category": "Dessert",
            "cookTime": 12,
            "prepTime": 20,
            "difficulty": "Easy",
            "servings": 24,
            "defaultServings": 24,
            "rating": 4.9,
            "reviews": 311,
            "ingredients": [
                { "name": "butter", "amount": 225, "unit": "g" },
                { "name": "brown sugar", "amount": 200, "unit": "g" },
                { "name": "chocolate chips", "amount": 300, "unit": "g" }
            ],
            "instructions": [
                "Brown the butter and let it cool.",
                "Mix in sugars, eggs, then flour.",
                "Fold in the chocolate and bake at 180°C for 12 minutes."
            ],
            "tags": ["sweet", "baking"]
        }),
    ];

    fields
        .into_iter()
        .filter_map(|f| match seed_recipe(now, f) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                log::error!("   ❌ Skipping malformed seed recipe: {}", e);
                None
            }
        })
        .collect()
}
