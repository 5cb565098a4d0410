/// Wordlist discovery — every regular file directly inside a directory.
///
/// Uses `jwalk` with `max_depth(1)` and sorted output so the scan order is
/// stable across runs and platforms.
use crate::error::SourceDirError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the wordlist files in `dir`, sorted by name. Subdirectories are not
/// descended into.
pub fn discover_wordlists(dir: &Path) -> Result<Vec<PathBuf>, SourceDirError> {
    if !dir.is_dir() {
        return Err(SourceDirError::Missing(dir.to_path_buf()));
    }

    let walker = jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(true)
        .sort(true)
        .max_depth(1)
        .parallelism(jwalk::Parallelism::Serial);

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| SourceDirError::Unreadable {
            path: dir.to_path_buf(),
            message: err.to_string(),
        })?;
        if entry.depth == 0 || !entry.file_type().is_file() {
            continue;
        }
        files.push(entry.path());
    }

    debug!("Found {} wordlists in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_files_sorted_and_skips_subdirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "x\n").unwrap();
        fs::write(tmp.path().join("a.txt"), "y\n").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("c.txt"), "z\n").unwrap();

        let files = discover_wordlists(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = discover_wordlists(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SourceDirError::Missing(_)));
    }
}
