//! Preference persistence
//!
//! The theme preference survives reloads through a [`PreferenceStore`]. The
//! store is read once when the page mounts and written on every change.
//! Stores may fail (no disk, storage disabled); the theme state degrades to
//! in-memory behaviour rather than surfacing those failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scheme::ColorScheme;

/// Key the preference is stored under
pub const THEME_KEY: &str = "theme";

/// Errors raised by preference stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference store is unavailable")]
    Unavailable,

    #[error("failed to access preference file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference file {} is not valid JSON", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value persistence for the color scheme preference
pub trait PreferenceStore {
    /// Stored preference, `None` if nothing has been stored yet
    fn read(&self) -> StoreResult<Option<ColorScheme>>;

    fn write(&mut self, scheme: ColorScheme) -> StoreResult<()>;
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-process store, optionally failing to simulate disabled storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<ColorScheme>,
    reads_fail: bool,
    writes_fail: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `scheme`
    pub fn with_value(scheme: ColorScheme) -> Self {
        Self {
            value: Some(scheme),
            ..Self::default()
        }
    }

    /// Store whose reads and writes always fail
    pub fn unavailable() -> Self {
        Self {
            reads_fail: true,
            writes_fail: true,
            ..Self::default()
        }
    }

    /// Builder: make writes fail while reads keep working
    pub fn failing_writes(mut self) -> Self {
        self.writes_fail = true;
        self
    }

    /// Value currently held, bypassing failure simulation
    pub fn value(&self) -> Option<ColorScheme> {
        self.value
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> StoreResult<Option<ColorScheme>> {
        if self.reads_fail {
            return Err(StoreError::Unavailable);
        }
        Ok(self.value)
    }

    fn write(&mut self, scheme: ColorScheme) -> StoreResult<()> {
        if self.writes_fail {
            return Err(StoreError::Unavailable);
        }
        self.value = Some(scheme);
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// File Store
// ============================================================================

/// JSON object on disk, e.g. `{"theme": "dark"}`.
///
/// Entries under other keys are preserved when the preference is written,
/// whatever their type. Writes go to a sibling temporary file that is then
/// renamed over the original.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

type Entries = serde_json::Map<String, serde_json::Value>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn encoding_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Encoding {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&self) -> StoreResult<Entries> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&contents).map_err(|source| self.encoding_error(source))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn replace_contents(&self, json: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let temp = self.temp_path();
        let result = fs::write(&temp, json).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(source) = result {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(source));
        }
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn read(&self) -> StoreResult<Option<ColorScheme>> {
        let entries = self.load()?;
        let Some(value) = entries.get(THEME_KEY) else {
            return Ok(None);
        };
        let Some(raw) = value.as_str() else {
            tracing::warn!(path = %self.path.display(), "ignoring non-string stored theme");
            return Ok(None);
        };

        match raw.parse() {
            Ok(scheme) => Ok(Some(scheme)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring stored theme: {err}");
                Ok(None)
            }
        }
    }

    fn write(&mut self, scheme: ColorScheme) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.insert(THEME_KEY.to_string(), serde_json::Value::String(scheme.to_string()));

        let json =
            serde_json::to_string_pretty(&entries).map_err(|source| self.encoding_error(source))?;
        self.replace_contents(&json)
    }
}
