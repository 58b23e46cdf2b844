use std::fs;
use std::path::Path;

/// Create a file of exactly `size` filler bytes, creating parent
/// directories as needed.
pub fn write_sized_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent directories");
    }
    fs::write(path, vec![b'x'; size]).expect("failed to write test file");
}

/// Number of entries directly under `path`.
pub fn entry_count(path: &Path) -> usize {
    fs::read_dir(path)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
