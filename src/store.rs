//! Coordinator owning the gateway, the cache, and the edit session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::RecipeCache;
use crate::error::SyncError;
use crate::gateway::RecipeCollection;
use crate::model::{Recipe, RecipeId};
use crate::session::{EditSession, RecipeDraft};

/// Handle that signals the consuming view went away. Cloneable so it can
/// outlive any borrow of the store itself.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// Marks the view as torn down; an in-flight refresh result will be
    /// discarded instead of applied.
    pub fn detach(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Application-state owner for the recipe list and its edit overlay.
///
/// The cache only ever changes after the gateway confirms an operation; a
/// failed call leaves both the cache and the session exactly as they were,
/// so an open draft survives the failure and the user can retry.
pub struct RecipeStore {
    gateway: Box<dyn RecipeCollection>,
    cache: RecipeCache,
    session: EditSession,
    live: Liveness,
}

impl RecipeStore {
    pub fn new(gateway: impl RecipeCollection + 'static) -> Self {
        RecipeStore {
            gateway: Box::new(gateway),
            cache: RecipeCache::new(),
            session: EditSession::default(),
            live: Liveness(Arc::new(AtomicBool::new(true))),
        }
    }

    /// Server-confirmed recipes, in display order.
    pub fn recipes(&self) -> &[Recipe] {
        self.cache.recipes()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.cache.get(id)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Teardown handle for the consuming view.
    pub fn liveness(&self) -> Liveness {
        self.live.clone()
    }

    pub fn is_live(&self) -> bool {
        self.live.is_live()
    }

    /// Fetches the whole collection and replaces the cache with it.
    ///
    /// On failure the cache keeps its previous contents (no destructive
    /// clear). After teardown the fetched result is discarded unapplied.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        let recipes = self.gateway.fetch_all().await?;
        if !self.is_live() {
            debug!(
                "view torn down while fetching, discarding {} recipes",
                recipes.len()
            );
            return Ok(());
        }
        self.cache.replace_all(recipes);
        Ok(())
    }

    /// Opens `id` for inspection. Unknown ids are ignored with a warning.
    pub fn open(&mut self, id: RecipeId) {
        match self.cache.get(id) {
            Some(recipe) => self.session = EditSession::Viewing(recipe.clone()),
            None => warn!("cannot view recipe {}: not in the cache", id),
        }
    }

    /// Opens `id` for editing, copying its fields into a fresh draft.
    pub fn edit(&mut self, id: RecipeId) {
        match self.cache.get(id) {
            Some(recipe) => {
                self.session = EditSession::Editing {
                    target: Some(id),
                    draft: RecipeDraft::from_recipe(recipe),
                }
            }
            None => warn!("cannot edit recipe {}: not in the cache", id),
        }
    }

    /// Starts a blank draft for a new recipe.
    pub fn compose(&mut self) {
        self.session = EditSession::Editing {
            target: None,
            draft: RecipeDraft::default(),
        };
    }

    /// Closes the overlay, discarding any in-progress draft.
    pub fn close(&mut self) {
        self.session = EditSession::Closed;
    }

    /// The in-progress draft, for field-level edits.
    pub fn draft_mut(&mut self) -> Option<&mut RecipeDraft> {
        self.session.draft_mut()
    }

    /// Commits the current draft: create when it has no target, update
    /// otherwise. The cache changes and the session closes only once the
    /// gateway confirms; on failure the draft stays open, untouched.
    /// Outside of `Editing` this is a warned no-op.
    pub async fn submit(&mut self) -> Result<(), SyncError> {
        let (target, draft) = match &self.session {
            EditSession::Editing { target, draft } => (*target, draft.clone()),
            _ => {
                warn!("submit requested with no draft open");
                return Ok(());
            }
        };

        match target {
            None => {
                let created = self.gateway.create(&draft).await?;
                self.cache.append(created);
            }
            Some(id) => {
                let updated = self.gateway.update(id, &draft).await?;
                self.cache.replace_by_id(updated);
            }
        }

        self.session = EditSession::Closed;
        Ok(())
    }

    /// Deletes `id` remotely, then drops it from the cache; if the overlay
    /// is showing or editing that entry it closes as part of the same
    /// action. On failure everything stays, the overlay included.
    pub async fn remove(&mut self, id: RecipeId) -> Result<(), SyncError> {
        self.gateway.delete(id).await?;
        self.cache.remove_by_id(id);
        if self.session.involves(id) {
            self.session = EditSession::Closed;
        }
        Ok(())
    }
}
