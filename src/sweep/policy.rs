use serde::Deserialize;

use crate::settings::SettingsProvider;

/// The cleanup policy for one sweep run.
///
/// Loaded once per run from the settings provider and read-only afterwards;
/// editing the settings mid-run has no effect until the next run.
#[derive(Debug, Clone, Default)]
pub struct CleanupPolicy {
    /// Whether the sweep runs at all. Disabled means no filesystem access.
    pub enabled: bool,
    /// Whether directory sizes are computed and compared to the threshold.
    pub size_check_enabled: bool,
    /// The configured capacity string, e.g. "2GB". Parsed lazily by the
    /// runner; unparseable values mean "no effective threshold".
    pub capacity: String,
    /// Whether directories are archived before being emptied.
    pub backup_enabled: bool,
    /// Folder names eligible for cleanup, by exact match. An empty list
    /// means the run takes no destructive action at all.
    pub folders: Vec<String>,
}

impl CleanupPolicy {
    /// Assemble the policy for this run from the settings provider.
    pub fn load(settings: &impl SettingsProvider) -> Self {
        Self {
            enabled: settings.module_enabled(),
            size_check_enabled: settings.size_check_enabled(),
            capacity: settings.capacity().to_string(),
            backup_enabled: settings.backup_enabled(),
            folders: decode_folder_list(settings.folder_list_json()),
        }
    }
}

/// One row of the stored allow-list. Rows without a `folders` field are
/// skipped rather than rejected.
#[derive(Debug, Deserialize)]
struct FolderRow {
    folders: Option<String>,
}

/// Decode the allow-list, stored as a JSON array of `{"folders": "<name>"}`
/// rows. Anything that does not decode yields an empty list — a corrupt
/// settings value must degrade to "touch nothing", never to an error.
pub(crate) fn decode_folder_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<FolderRow>>(raw) {
        Ok(rows) => rows.into_iter().filter_map(|row| row.folders).collect(),
        Err(_) => Vec::new(),
    }
}
