//! Path utilities: expand ~, derive the report path from the input path.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<input-dir>/<input-stem><suffix>.<ext>`
///
/// `ext = None` keeps the input extension (if any).
pub fn derive_output_path(input: &Path, suffix: &str, ext: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let ext = match ext {
        Some(e) => Some(e.to_string()),
        None => input.extension().map(|e| e.to_string_lossy().to_string()),
    };

    let file_name = match ext {
        Some(e) if !e.is_empty() => format!("{stem}{suffix}.{e}"),
        _ => format!("{stem}{suffix}"),
    };

    input.with_file_name(file_name)
}
