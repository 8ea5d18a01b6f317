use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{ListKind, UserLibrary},
};

const MAX_USERNAME_LEN: usize = 32;

/// Change applied to a library inside [`LibraryStore::update`]
pub type LibraryUpdate = Box<dyn FnOnce(&mut UserLibrary) -> bool + Send>;

/// Storage backend for per-user movie lists
///
/// The store is created at startup and handed to whoever needs it; all
/// mutation goes through [`toggle`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LibraryStore: Send + Sync {
    /// Loads a user's library, if one was ever saved
    async fn load(&self, username: &str) -> AppResult<Option<UserLibrary>>;

    /// Applies `apply` to the user's library (created empty if missing) and
    /// persists the result. Concurrent updates for one user must not
    /// interleave. Returns the updated library and the closure's result.
    async fn update(&self, username: &str, apply: LibraryUpdate) -> AppResult<(UserLibrary, bool)>;
}

/// Process-local library store
#[derive(Default)]
pub struct InMemoryLibraryStore {
    libraries: RwLock<HashMap<String, UserLibrary>>,
}

impl InMemoryLibraryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LibraryStore for InMemoryLibraryStore {
    async fn load(&self, username: &str) -> AppResult<Option<UserLibrary>> {
        Ok(self.libraries.read().await.get(username).cloned())
    }

    async fn update(&self, username: &str, apply: LibraryUpdate) -> AppResult<(UserLibrary, bool)> {
        let mut libraries = self.libraries.write().await;
        let library = libraries
            .entry(username.to_string())
            .or_insert_with(|| UserLibrary::new(username));
        let outcome = apply(&mut *library);
        Ok((library.clone(), outcome))
    }
}

/// Returns a user's library, or an empty one for users with no saved lists
pub async fn get_library(store: Arc<dyn LibraryStore>, username: &str) -> AppResult<UserLibrary> {
    let username = validate_username(username)?;
    Ok(store
        .load(username)
        .await?
        .unwrap_or_else(|| UserLibrary::new(username)))
}

/// Adds the movie to the list if absent, removes it if present
pub async fn toggle(
    store: Arc<dyn LibraryStore>,
    username: &str,
    kind: ListKind,
    movie_id: u64,
) -> AppResult<UserLibrary> {
    let username = validate_username(username)?;
    let (library, now_present) = store
        .update(
            username,
            Box::new(move |library| library.toggle(kind, movie_id)),
        )
        .await?;

    tracing::debug!(
        username = %username,
        list = ?kind,
        movie_id,
        now_present,
        "Toggled library entry"
    );

    Ok(library)
}

fn validate_username(username: &str) -> AppResult<&str> {
    let username = username.trim();

    if username.is_empty() {
        return Err(AppError::InvalidInput("Username cannot be empty".to_string()));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Username cannot exceed {} characters",
            MAX_USERNAME_LEN
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::InvalidInput(format!(
            "Username contains invalid characters: {}",
            username
        )));
    }

    Ok(username)
}
