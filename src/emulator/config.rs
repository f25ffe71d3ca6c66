// Configuration management
//
// Emulator settings persisted as TOML next to the binary, loaded on startup
// and recreated with defaults when missing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Trace settings
    pub trace: TraceConfig,

    /// Run-loop settings
    pub run: RunConfig,
}

/// Trace configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Emit one trace line per instruction. Debug builds trace regardless.
    pub enabled: bool,

    /// Also write trace lines to this file
    pub output_file: Option<PathBuf>,

    /// Stop tracing (not execution) after this many instructions
    pub limit: Option<u64>,
}

/// Run-loop configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Override the reset vector after `reset`. The nestest ROM's
    /// automation mode wants execution to start at $C000.
    pub start_pc: Option<u16>,

    /// Stop after this many instructions; unset means run until an error
    pub max_instructions: Option<u64>,
}

impl EmulatorConfig {
    /// Load configuration from file, or create and persist the defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Persisting the defaults is a convenience, not a requirement
            let _ = config.save();
            config
        })
    }

    /// Load configuration from `famicore.toml`.
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to `famicore.toml`.
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
