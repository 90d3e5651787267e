use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service, or a local fallback
/// (Unix time in milliseconds) when the service omits one.
pub type RecipeId = i64;

/// Recipe category. The service uses the Portuguese wire values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "DOCE")]
    Sweet,
    #[serde(rename = "SALGADA")]
    Savory,
}

impl Category {
    /// Parses a wire value. Unknown values return `None`; callers pick
    /// the fallback (the draft's category on echo paths, `Sweet` otherwise).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "DOCE" => Some(Category::Sweet),
            "SALGADA" => Some(Category::Savory),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Category::Sweet => "DOCE",
            Category::Savory => "SALGADA",
        }
    }
}

/// Canonical recipe shape held in the cache and handed to consumers.
///
/// The serialized form uses camelCase names; the remote service's own
/// Portuguese field names only exist at the normalization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
    pub category: Category,
    pub approximate_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_round_trip() {
        assert_eq!(Category::from_wire("DOCE"), Some(Category::Sweet));
        assert_eq!(Category::from_wire("SALGADA"), Some(Category::Savory));
        assert_eq!(Category::Sweet.as_wire(), "DOCE");
        assert_eq!(Category::Savory.as_wire(), "SALGADA");
    }

    #[test]
    fn test_category_unknown_wire_value() {
        assert_eq!(Category::from_wire("doce"), None);
        assert_eq!(Category::from_wire(""), None);
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: 1,
            name: "Bolo".to_string(),
            ingredients: vec!["Farinha".to_string(), "Ovo".to_string()],
            instructions: "Misture e asse.".to_string(),
            image_url: "https://example.com/bolo.jpg".to_string(),
            category: Category::Sweet,
            approximate_cost: 12.5,
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["imageUrl"], "https://example.com/bolo.jpg");
        assert_eq!(value["approximateCost"], 12.5);
        assert_eq!(value["category"], "DOCE");
    }
}
