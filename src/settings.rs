//! Settings provider for the sweep.
//!
//! The sweep reads its policy through the [`SettingsProvider`] trait rather
//! than from any global state, so the orchestrator can be driven from a
//! settings file in production and from plain values in tests.
//!
//! [`FileSettings`] is the production implementation: a small TOML file,
//! conventionally `<var_root>/varsweep.toml`:
//!
//! ```toml
//! [general]
//! enable = true
//! frequency = "daily"
//! capacity = "2GB"
//! capacity_check = true
//! backup = false
//!
//! [folders]
//! list = '[{"folders":"log"},{"folders":"cache"}]'
//! ```
//!
//! Every failure mode degrades to a safe default rather than an error: a
//! missing or malformed file behaves as "module disabled", a malformed
//! folder list behaves as "no folders configured". A bad settings edit must
//! never crash a scheduled run or, worse, widen what it deletes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Read access to the sweep's configuration, one getter per setting.
pub trait SettingsProvider {
    /// Whether the sweep module is enabled at all.
    fn module_enabled(&self) -> bool;

    /// Opaque schedule descriptor. The sweep itself never interprets this;
    /// it exists for the external scheduler that triggers `varsweep run`.
    fn frequency(&self) -> Option<&str>;

    /// The configured capacity string, e.g. "2GB". Free text; parsing and
    /// fallback behavior live in [`crate::sweep::parse_capacity`].
    fn capacity(&self) -> &str;

    /// Whether directory sizes should be computed and checked against the
    /// capacity threshold.
    fn size_check_enabled(&self) -> bool;

    /// Whether directories are archived before being emptied.
    fn backup_enabled(&self) -> bool;

    /// The raw JSON-encoded folder allow-list, if configured.
    fn folder_list_json(&self) -> Option<&str>;
}

/// Settings backed by a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    general: GeneralSection,
    folders: FoldersSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct GeneralSection {
    enable: bool,
    frequency: Option<String>,
    capacity: String,
    capacity_check: bool,
    backup: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            enable: false,
            frequency: None,
            capacity: String::new(),
            capacity_check: false,
            backup: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FoldersSection {
    list: Option<String>,
}

impl FileSettings {
    /// Load settings from a TOML file.
    ///
    /// Any failure — missing file, unreadable file, invalid TOML — yields
    /// the defaults, which leave the module disabled.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

impl SettingsProvider for FileSettings {
    fn module_enabled(&self) -> bool {
        self.general.enable
    }

    fn frequency(&self) -> Option<&str> {
        self.general.frequency.as_deref()
    }

    fn capacity(&self) -> &str {
        &self.general.capacity
    }

    fn size_check_enabled(&self) -> bool {
        self.general.capacity_check
    }

    fn backup_enabled(&self) -> bool {
        self.general.backup
    }

    fn folder_list_json(&self) -> Option<&str> {
        self.folders.list.as_deref()
    }
}

/// Settings held directly in memory, for programmatic use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    pub enabled: bool,
    pub frequency: Option<String>,
    pub capacity: String,
    pub size_check_enabled: bool,
    pub backup_enabled: bool,
    pub folder_list_json: Option<String>,
}

impl SettingsProvider for StaticSettings {
    fn module_enabled(&self) -> bool {
        self.enabled
    }

    fn frequency(&self) -> Option<&str> {
        self.frequency.as_deref()
    }

    fn capacity(&self) -> &str {
        &self.capacity
    }

    fn size_check_enabled(&self) -> bool {
        self.size_check_enabled
    }

    fn backup_enabled(&self) -> bool {
        self.backup_enabled
    }

    fn folder_list_json(&self) -> Option<&str> {
        self.folder_list_json.as_deref()
    }
}
