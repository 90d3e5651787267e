//! Transient view/edit state, kept apart from the cache until committed.

use log::debug;

use crate::model::{Category, Recipe, RecipeId};
use crate::normalize::{join_ingredients, RecipePayload};

/// Mutable, uncommitted copy of a recipe held while creating or editing.
///
/// The ingredient list always holds at least one slot so a dynamic input
/// list has something to render; blank slots are dropped when the draft is
/// turned into a payload for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
    pub category: Category,
    pub approximate_cost: f64,
}

impl Default for RecipeDraft {
    /// Blank draft for a new recipe: one empty ingredient slot, `Sweet`
    /// preselected, zero cost.
    fn default() -> Self {
        RecipeDraft {
            name: String::new(),
            ingredients: vec![String::new()],
            instructions: String::new(),
            image_url: String::new(),
            category: Category::default(),
            approximate_cost: 0.0,
        }
    }
}

impl RecipeDraft {
    /// Editable copy of an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut ingredients = recipe.ingredients.clone();
        if ingredients.is_empty() {
            ingredients.push(String::new());
        }

        RecipeDraft {
            name: recipe.name.clone(),
            ingredients,
            instructions: recipe.instructions.clone(),
            image_url: recipe.image_url.clone(),
            category: recipe.category,
            approximate_cost: recipe.approximate_cost,
        }
    }

    /// Overwrites one ingredient slot. Writes past the end are ignored;
    /// slots only appear through [`RecipeDraft::add_ingredient_slot`].
    pub fn set_ingredient(&mut self, index: usize, value: impl Into<String>) {
        match self.ingredients.get_mut(index) {
            Some(slot) => *slot = value.into(),
            None => debug!("ignoring write to missing ingredient slot {}", index),
        }
    }

    /// Appends one blank slot to the ingredient list.
    pub fn add_ingredient_slot(&mut self) {
        self.ingredients.push(String::new());
    }

    /// The trimmed, blank-free sequence that actually gets submitted.
    pub fn submission_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }

    /// Wire payload for create and update calls.
    pub fn to_payload(&self) -> RecipePayload {
        RecipePayload {
            name: self.name.clone(),
            ingredients: join_ingredients(&self.submission_ingredients()),
            instructions: self.instructions.clone(),
            image_url: self.image_url.clone(),
            category: self.category,
            approximate_cost: self.approximate_cost,
        }
    }
}

/// What the detail overlay is currently doing.
///
/// `Editing` with no target is a new-recipe draft; with a target it is an
/// edit of that cache entry. The draft lives here, never in the cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Viewing(Recipe),
    Editing {
        target: Option<RecipeId>,
        draft: RecipeDraft,
    },
}

impl EditSession {
    pub fn is_closed(&self) -> bool {
        matches!(self, EditSession::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// The recipe open for inspection, when in `Viewing`.
    pub fn viewing(&self) -> Option<&Recipe> {
        match self {
            EditSession::Viewing(recipe) => Some(recipe),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&RecipeDraft> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut RecipeDraft> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The id of the entry being edited, when editing an existing one.
    pub fn editing_target(&self) -> Option<RecipeId> {
        match self {
            EditSession::Editing { target, .. } => *target,
            _ => None,
        }
    }

    /// Whether the session currently points at `id`, viewing or editing.
    /// Deleting that entry has to close the session.
    pub fn involves(&self, id: RecipeId) -> bool {
        match self {
            EditSession::Closed => false,
            EditSession::Viewing(recipe) => recipe.id == id,
            EditSession::Editing { target, .. } => *target == Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: 7,
            name: "Bolo".to_string(),
            ingredients: vec!["Farinha".to_string(), "Ovo".to_string()],
            instructions: "Misture e asse.".to_string(),
            image_url: "https://example.com/bolo.jpg".to_string(),
            category: Category::Sweet,
            approximate_cost: 12.5,
        }
    }

    #[test]
    fn test_blank_draft_has_one_empty_slot() {
        let draft = RecipeDraft::default();
        assert_eq!(draft.ingredients, vec![""]);
        assert_eq!(draft.category, Category::Sweet);
        assert_eq!(draft.approximate_cost, 0.0);
    }

    #[test]
    fn test_from_recipe_copies_every_field() {
        let draft = RecipeDraft::from_recipe(&recipe());
        assert_eq!(draft.name, "Bolo");
        assert_eq!(draft.ingredients, vec!["Farinha", "Ovo"]);
        assert_eq!(draft.instructions, "Misture e asse.");
        assert_eq!(draft.image_url, "https://example.com/bolo.jpg");
        assert_eq!(draft.category, Category::Sweet);
        assert_eq!(draft.approximate_cost, 12.5);
    }

    #[test]
    fn test_from_recipe_with_no_ingredients_gets_a_blank_slot() {
        let mut bare = recipe();
        bare.ingredients.clear();
        let draft = RecipeDraft::from_recipe(&bare);
        assert_eq!(draft.ingredients, vec![""]);
    }

    #[test]
    fn test_set_ingredient_in_range() {
        let mut draft = RecipeDraft::default();
        draft.set_ingredient(0, "Farinha");
        draft.add_ingredient_slot();
        draft.set_ingredient(1, "Ovo");
        assert_eq!(draft.ingredients, vec!["Farinha", "Ovo"]);
    }

    #[test]
    fn test_set_ingredient_out_of_range_is_ignored() {
        let mut draft = RecipeDraft::default();
        draft.set_ingredient(5, "Ovo");
        assert_eq!(draft.ingredients, vec![""]);
    }

    #[test]
    fn test_submission_ingredients_drops_blank_slots() {
        let mut draft = RecipeDraft::default();
        draft.set_ingredient(0, " Farinha ");
        draft.add_ingredient_slot();
        draft.add_ingredient_slot();
        draft.set_ingredient(2, "Ovo");
        assert_eq!(draft.submission_ingredients(), vec!["Farinha", "Ovo"]);
    }

    #[test]
    fn test_to_payload_joins_ingredients() {
        let draft = RecipeDraft::from_recipe(&recipe());
        let payload = draft.to_payload();
        assert_eq!(payload.ingredients, "Farinha, Ovo");
        assert_eq!(payload.name, "Bolo");
        assert_eq!(payload.category, Category::Sweet);
    }

    #[test]
    fn test_to_payload_of_untouched_blank_draft_is_empty() {
        let payload = RecipeDraft::default().to_payload();
        assert_eq!(payload.ingredients, "");
    }

    #[test]
    fn test_session_starts_closed() {
        assert!(EditSession::default().is_closed());
    }

    #[test]
    fn test_involves_viewing_and_editing() {
        let viewing = EditSession::Viewing(recipe());
        assert!(viewing.involves(7));
        assert!(!viewing.involves(8));
        assert_eq!(viewing.editing_target(), None);

        let editing = EditSession::Editing {
            target: Some(7),
            draft: RecipeDraft::from_recipe(&recipe()),
        };
        assert!(editing.involves(7));
        assert!(!editing.involves(8));
        assert_eq!(editing.editing_target(), Some(7));

        let composing = EditSession::Editing {
            target: None,
            draft: RecipeDraft::default(),
        };
        assert!(!composing.involves(7));
        assert_eq!(composing.editing_target(), None);
    }

    #[test]
    fn test_draft_access_only_while_editing() {
        let mut session = EditSession::Viewing(recipe());
        assert!(session.draft().is_none());
        assert!(session.draft_mut().is_none());

        session = EditSession::Editing {
            target: None,
            draft: RecipeDraft::default(),
        };
        session.draft_mut().unwrap().set_ingredient(0, "Sal");
        assert_eq!(session.draft().unwrap().ingredients, vec!["Sal"]);
    }
}
