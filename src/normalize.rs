//! Normalization boundary between the remote service's JSON and the
//! canonical [`Recipe`] shape.
//!
//! The service is loose about shapes: `ingredientes` may arrive as an
//! array or as one comma-separated string, ids may be numbers or numeric
//! strings, and create/update responses may echo only part of what was
//! submitted. Every record read from the wire passes through here exactly
//! once, so nothing deeper in the crate branches on shape.

use serde::Serialize;
use serde_json::Value;

use crate::model::{Category, Recipe, RecipeId};

// Incoming field names. The service's Portuguese names come first; the
// canonical camelCase names are accepted as aliases.
const NAME_KEYS: &[&str] = &["nome", "name"];
const INGREDIENT_KEYS: &[&str] = &["ingredientes", "ingredients"];
const INSTRUCTION_KEYS: &[&str] = &["modoFazer", "instructions"];
const IMAGE_KEYS: &[&str] = &["img", "imageUrl"];
const CATEGORY_KEYS: &[&str] = &["tipo", "category"];
const COST_KEYS: &[&str] = &["custoAproximado", "approximateCost"];

/// Request body for `POST {base}` and `PUT {base}/{id}`.
///
/// The service expects its own field names and `ingredientes` as a single
/// comma-and-space-joined string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    #[serde(rename = "modoFazer")]
    pub instructions: String,
    #[serde(rename = "img")]
    pub image_url: String,
    #[serde(rename = "tipo")]
    pub category: Category,
    #[serde(rename = "custoAproximado")]
    pub approximate_cost: f64,
}

impl RecipePayload {
    /// The submitted ingredient sequence, recovered from the joined wire
    /// string. An empty payload stays empty instead of becoming `[""]`.
    pub fn ingredient_items(&self) -> Vec<String> {
        if self.ingredients.is_empty() {
            Vec::new()
        } else {
            split_ingredients(&self.ingredients)
        }
    }
}

/// Joins ingredient items the way the service expects them written.
pub fn join_ingredients(items: &[String]) -> String {
    items.join(", ")
}

/// Splits a comma-separated wire string into trimmed items. Empty segments
/// are kept so server-echoed content round-trips exactly.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',').map(|item| item.trim().to_string()).collect()
}

/// Canonicalizes one server-returned record.
///
/// Total over any JSON value: missing or unusable fields become defaults
/// (`fallback_id` for the id, empty text, empty list, zero cost, `Sweet`).
/// Callers pass the current time in milliseconds as `fallback_id` so every
/// locally held recipe carries a usable identifier even when the remote
/// omits one; taking it as a parameter keeps the function pure.
pub fn normalize(raw: &Value, fallback_id: RecipeId) -> Recipe {
    Recipe {
        id: field(raw, &["id"]).and_then(coerce_id).unwrap_or(fallback_id),
        name: text_field(raw, NAME_KEYS).unwrap_or_default(),
        ingredients: field(raw, INGREDIENT_KEYS)
            .and_then(coerce_ingredients)
            .unwrap_or_default(),
        instructions: text_field(raw, INSTRUCTION_KEYS).unwrap_or_default(),
        image_url: text_field(raw, IMAGE_KEYS).unwrap_or_default(),
        category: text_field(raw, CATEGORY_KEYS)
            .as_deref()
            .and_then(Category::from_wire)
            .unwrap_or_default(),
        approximate_cost: field(raw, COST_KEYS).and_then(coerce_cost).unwrap_or(0.0),
    }
}

/// Canonicalizes a create/update response against the payload that was
/// submitted: any field the server left out, or returned in an unusable
/// shape, falls back to the submitted value. The id still falls back to
/// `fallback_id` because the payload never carries one.
pub fn normalize_echo(raw: &Value, submitted: &RecipePayload, fallback_id: RecipeId) -> Recipe {
    Recipe {
        id: field(raw, &["id"]).and_then(coerce_id).unwrap_or(fallback_id),
        name: text_field(raw, NAME_KEYS).unwrap_or_else(|| submitted.name.clone()),
        ingredients: field(raw, INGREDIENT_KEYS)
            .and_then(coerce_ingredients)
            .unwrap_or_else(|| submitted.ingredient_items()),
        instructions: text_field(raw, INSTRUCTION_KEYS)
            .unwrap_or_else(|| submitted.instructions.clone()),
        image_url: text_field(raw, IMAGE_KEYS).unwrap_or_else(|| submitted.image_url.clone()),
        category: text_field(raw, CATEGORY_KEYS)
            .as_deref()
            .and_then(Category::from_wire)
            .unwrap_or(submitted.category),
        approximate_cost: field(raw, COST_KEYS)
            .and_then(coerce_cost)
            .unwrap_or(submitted.approximate_cost),
    }
}

/// First non-null value among the candidate keys. Returns `None` for
/// non-object input, so the normalizers stay total.
fn field<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| raw.get(key).filter(|value| !value.is_null()))
}

fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    field(raw, keys).and_then(coerce_text)
}

fn coerce_id(value: &Value) -> Option<RecipeId> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<RecipeId>().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_cost(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// An array is used as-is (scalar items rendered as text); a string is
/// split on commas, except that the empty string holds zero items, not one
/// blank one. Anything else is unusable.
fn coerce_ingredients(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect(),
        ),
        Value::String(text) if text.is_empty() => Some(Vec::new()),
        Value::String(text) => Some(split_ingredients(text)),
        _ => None,
    }
}
