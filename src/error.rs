use thiserror::Error;

use crate::model::RecipeId;

/// Low-level failure of a single remote call.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Request never completed, or the service answered with an error status
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was valid JSON but not the shape this operation expects
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Errors reported by the synchronization layer.
///
/// All of these are non-fatal: the cache and edit session keep their
/// previous state and the action can simply be retried.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The collection could not be fetched; existing local state is untouched
    #[error("failed to fetch recipes: {0}")]
    FetchFailed(#[source] RemoteError),

    /// The create call failed; nothing was added to the cache
    #[error("failed to create recipe: {0}")]
    CreateFailed(#[source] RemoteError),

    /// The update call failed; the cached entry is unchanged
    #[error("failed to update recipe {id}: {source}")]
    UpdateFailed {
        id: RecipeId,
        #[source]
        source: RemoteError,
    },

    /// The delete call failed; the entry stays in the cache
    #[error("failed to delete recipe {id}: {source}")]
    DeleteFailed {
        id: RecipeId,
        #[source]
        source: RemoteError,
    },
}
