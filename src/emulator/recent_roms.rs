// Recent ROMs list
//
// MRU list of loaded ROM files. The CLI prints it when invoked without a
// ROM argument, so a user can see what they last played.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default recent ROMs file path
const RECENT_ROMS_FILE: &str = "recent_roms.toml";

/// Maximum number of entries kept
const MAX_RECENT_ROMS: usize = 10;

/// Entry for one recently opened ROM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentRomEntry {
    pub path: PathBuf,
    /// RFC 3339 timestamp of the last load
    pub last_accessed: String,
    /// File name without extension; falls back to the full path for names
    /// with no stem
    pub display_name: String,
}

impl RecentRomEntry {
    fn new(path: &Path) -> Self {
        let display_name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        RecentRomEntry {
            path: path.to_path_buf(),
            last_accessed: chrono::Local::now().to_rfc3339(),
            display_name,
        }
    }
}

/// Most-recently-used ROM list, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentRoms {
    roms: Vec<RecentRomEntry>,
}

impl RecentRoms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(RECENT_ROMS_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(RECENT_ROMS_FILE, contents)
    }

    /// Record a load of `path`.
    ///
    /// A path already in the list is promoted to the front with a fresh
    /// timestamp; a new path evicts the oldest entry once the list is full.
    pub fn add<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();

        let entry = match self.roms.iter().position(|e| e.path == path) {
            Some(index) => {
                let mut entry = self.roms.remove(index);
                entry.last_accessed = chrono::Local::now().to_rfc3339();
                entry
            }
            None => RecentRomEntry::new(path),
        };

        self.roms.insert(0, entry);
        while self.roms.len() > MAX_RECENT_ROMS {
            self.roms.pop();
        }
    }

    pub fn entries(&self) -> &[RecentRomEntry] {
        &self.roms
    }
}
