use super::theme::Theme;

/// Storage key for the saved thought.
pub const NOTE_KEY: &str = "myThought_v2";
/// Storage key for the selected theme.
pub const THEME_KEY: &str = "siteTheme_v2";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Process-wide persistent string store (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("thought is empty")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The single persisted free-text note.
pub struct NoteStore<S> {
    store: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved note, if any. An empty stored value counts as none.
    pub fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.store.get(NOTE_KEY)?.filter(|s| !s.is_empty()))
    }

    /// Trim and persist `text`, returning what was stored.
    pub fn save(&mut self, text: &str) -> Result<String, NoteError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NoteError::Empty);
        }
        self.store.set(NOTE_KEY, trimmed)?;
        Ok(trimmed.to_string())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(NOTE_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Persisted theme choice.
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, falling back to the default when missing or unreadable.
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(v) => Theme::from_stored(v.as_deref()),
            Err(e) => {
                log::warn!("[theme] read failed: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
