use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `base` when it lives underneath it.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let path = lexical_normalize(path);
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(lexical_normalize(base)) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// The default data path is `<exe dir>/../data/data.json`; this keeps it
/// readable in the run summary.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
