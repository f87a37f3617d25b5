use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hatch_core::Character;
use tracing::debug;

use crate::error::SimResult;

/// A single slot holding the current character.
pub trait Store {
    /// Read the stored character, or `None` on first run.
    fn load(&self) -> SimResult<Option<Character>>;

    /// Replace the stored character.
    fn save(&mut self, character: &Character) -> SimResult<()>;
}

/// Keeps the character in memory. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<Character>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `character`.
    pub fn with(character: Character) -> Self {
        Self {
            slot: Some(character),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> SimResult<Option<Character>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, character: &Character) -> SimResult<()> {
        self.slot = Some(character.clone());
        Ok(())
    }
}

/// Keeps the character as pretty-printed JSON in one file.
///
/// Loaded records are validated, so a hand-edited file that breaks a stat
/// bound is rejected rather than simulated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store the character at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> SimResult<Option<Character>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no save file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let character: Character = serde_json::from_str(&content)?;
        character.validate()?;
        Ok(Some(character))
    }

    fn save(&mut self, character: &Character) -> SimResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(character)?;
        // Write beside the target and rename so a crash never leaves half a file.
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        debug!(path = %self.path.display(), character = %character.id, "saved");
        Ok(())
    }
}
