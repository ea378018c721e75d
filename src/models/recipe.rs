use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys the service owns; a caller cannot set them on create.
const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Recipe as stored in `recipes.json`.
///
/// Only the fields the service filters on are typed. Everything else the
/// caller sent (author, ingredients, instructions, ...) rides along in
/// `extra` and is written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Kept as written. Older files carry offset-less timestamps or none at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn from_new(new: NewRecipe, id: String, now: DateTime<Utc>) -> Self {
        let mut extra = new.extra;
        for key in RESERVED_KEYS {
            extra.remove(key);
        }
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        Recipe {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            cook_time: new.cook_time,
            rating: new.rating,
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            extra,
        }
    }
}

/// Body of `POST /api/recipes`: any subset of a recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub cook_time: Option<i64>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewRecipe {
    /// `{}` carries nothing worth storing.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.category.is_none()
            && self.cook_time.is_none()
            && self.rating.is_none()
            && self.extra.is_empty()
    }
}
