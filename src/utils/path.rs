//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Normalize a path to an absolute path.
///
/// Canonicalizes when the path exists, otherwise joins it onto the cwd.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Find a file by searching upward from the current directory.
///
/// ```text
/// /home/user/site/assets/   ← cwd
/// /home/user/site/site.toml ← found!
/// ```
pub fn find_upward(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_existing_path() {
        let dir = TempDir::new().unwrap();
        let normalized = normalize_path(dir.path());
        assert!(normalized.is_absolute());
        assert_eq!(normalized, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_upward_absolute() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("site.toml");
        assert_eq!(find_upward(&file), None);

        std::fs::write(&file, "").unwrap();
        assert_eq!(find_upward(&file), Some(file));
    }
}
