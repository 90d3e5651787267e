//! Remote gateway for the recipe collection resource.
//!
//! One attempt per user action: failures are tagged with the operation,
//! logged, and handed back to the caller. Retry and timeout policy belong
//! to the surrounding application, not here.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::error::{RemoteError, SyncError};
use crate::model::{Recipe, RecipeId};
use crate::normalize::{normalize, normalize_echo};
use crate::session::RecipeDraft;

/// The four operations the synchronizer needs from the remote collection.
///
/// [`RecipeGateway`] is the HTTP implementation; tests drive the store
/// through scripted fakes instead.
#[async_trait]
pub trait RecipeCollection: Send + Sync {
    /// GET the whole collection, normalized.
    async fn fetch_all(&self) -> Result<Vec<Recipe>, SyncError>;

    /// POST a new recipe built from `draft`; returns the confirmed entry.
    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, SyncError>;

    /// PUT `draft` over the recipe identified by `id`; the returned entry
    /// always carries `id`, whatever the server echoes.
    async fn update(&self, id: RecipeId, draft: &RecipeDraft) -> Result<Recipe, SyncError>;

    /// DELETE by id. Success is the absence of a transport error.
    async fn delete(&self, id: RecipeId) -> Result<(), SyncError>;
}

/// HTTP gateway bound to one collection endpoint.
pub struct RecipeGateway {
    client: Client,
    base_url: String,
}

impl RecipeGateway {
    /// `base_url` is the collection endpoint itself, e.g.
    /// `https://receitasapi-b-2025.vercel.app/receitas`.
    pub fn new(base_url: impl Into<String>) -> Self {
        RecipeGateway {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: RecipeId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn get_collection(&self) -> Result<Vec<Recipe>, RemoteError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = serde_json::from_str(&response.text().await?)?;

        let entries = match body {
            // The service answers `null` for an empty collection.
            Value::Null => Vec::new(),
            Value::Array(entries) => entries,
            other => {
                return Err(RemoteError::UnexpectedShape(format!(
                    "expected an array of recipes, got {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(entries
            .iter()
            .map(|raw| normalize(raw, now_millis()))
            .collect())
    }

    async fn post_item(&self, draft: &RecipeDraft) -> Result<Recipe, RemoteError> {
        let payload = draft.to_payload();
        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = serde_json::from_str(&response.text().await?)?;
        Ok(normalize_echo(&body, &payload, now_millis()))
    }

    async fn put_item(&self, id: RecipeId, draft: &RecipeDraft) -> Result<Recipe, RemoteError> {
        let payload = draft.to_payload();
        let response = self
            .client
            .put(self.item_url(id))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        let body: Value = serde_json::from_str(&response.text().await?)?;

        // The cache replacement must target the entry being edited, so the
        // requested id wins over anything the server echoes back.
        let mut recipe = normalize_echo(&body, &payload, id);
        recipe.id = id;
        Ok(recipe)
    }

    async fn delete_item(&self, id: RecipeId) -> Result<(), RemoteError> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl RecipeCollection for RecipeGateway {
    async fn fetch_all(&self) -> Result<Vec<Recipe>, SyncError> {
        match self.get_collection().await {
            Ok(recipes) => {
                debug!("fetched {} recipes from {}", recipes.len(), self.base_url);
                Ok(recipes)
            }
            Err(cause) => {
                warn!("fetching {} failed: {}", self.base_url, cause);
                Err(SyncError::FetchFailed(cause))
            }
        }
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, SyncError> {
        match self.post_item(draft).await {
            Ok(recipe) => {
                debug!("created recipe {} ({})", recipe.id, recipe.name);
                Ok(recipe)
            }
            Err(cause) => {
                warn!("creating a recipe at {} failed: {}", self.base_url, cause);
                Err(SyncError::CreateFailed(cause))
            }
        }
    }

    async fn update(&self, id: RecipeId, draft: &RecipeDraft) -> Result<Recipe, SyncError> {
        match self.put_item(id, draft).await {
            Ok(recipe) => {
                debug!("updated recipe {}", id);
                Ok(recipe)
            }
            Err(cause) => {
                warn!("updating recipe {} failed: {}", id, cause);
                Err(SyncError::UpdateFailed { id, source: cause })
            }
        }
    }

    async fn delete(&self, id: RecipeId) -> Result<(), SyncError> {
        match self.delete_item(id).await {
            Ok(()) => {
                debug!("deleted recipe {}", id);
                Ok(())
            }
            Err(cause) => {
                warn!("deleting recipe {} failed: {}", id, cause);
                Err(SyncError::DeleteFailed { id, source: cause })
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn now_millis() -> RecipeId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as RecipeId)
        .unwrap_or(0)
}
