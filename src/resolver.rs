use crate::config::{Config, TARGET_SUFFIX};
use crate::errors::{Error, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Resolves the configured path into the list of files to rewrite.
///
/// A regular file resolves to itself regardless of suffix: naming a file
/// directly is an explicit request to convert it. A directory is walked
/// depth-first, and every file under it whose name ends with `.go` is
/// collected exactly once, in directory-iteration order. Everything else in
/// the tree is silently skipped.
///
/// The traversal is read-only; any filesystem error during the walk aborts
/// the whole run.
pub fn resolve(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.path.exists() {
        return Err(Error::PathNotFound(config.path.clone()));
    }

    if config.path.is_file() {
        return Ok(vec![config.path.clone()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&config.path) {
        let entry = entry?;
        if entry.file_type().is_file() && has_target_suffix(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

// Suffix match on the whole file name, so `.go` itself and names like
// `a.b.go` are selected; `Path::extension` equality would miss the former.
fn has_target_suffix(name: &OsStr) -> bool {
    name.to_str()
        .map(|n| n.ends_with(TARGET_SUFFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(path: &Path) -> Config {
        Config::new(path.to_path_buf(), None)
    }

    #[test]
    fn missing_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir.path().join("nope"));

        assert!(matches!(resolve(&config), Err(Error::PathNotFound(_))));
    }

    #[test]
    fn single_file_passes_through_regardless_of_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "plain text").unwrap();

        let resolved = resolve(&config_for(&file)).unwrap();
        assert_eq!(resolved, vec![file]);
    }

    #[test]
    fn directory_collects_nested_go_files_exactly_once() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("pkg/deep")).unwrap();
        fs::write(temp_dir.path().join("main.go"), "").unwrap();
        fs::write(temp_dir.path().join("pkg/util.go"), "").unwrap();
        fs::write(temp_dir.path().join("pkg/deep/inner.go"), "").unwrap();
        fs::write(temp_dir.path().join("pkg/README.md"), "").unwrap();

        let mut resolved = resolve(&config_for(temp_dir.path())).unwrap();
        resolved.sort();

        let mut expected = vec![
            temp_dir.path().join("main.go"),
            temp_dir.path().join("pkg/deep/inner.go"),
            temp_dir.path().join("pkg/util.go"),
        ];
        expected.sort();

        assert_eq!(resolved, expected);
    }

    #[test]
    fn empty_directory_resolves_to_no_files() {
        let temp_dir = TempDir::new().unwrap();

        let resolved = resolve(&config_for(temp_dir.path())).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn non_matching_files_in_directory_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.sh"), "").unwrap();
        fs::write(temp_dir.path().join("golang.txt"), "").unwrap();

        let resolved = resolve(&config_for(temp_dir.path())).unwrap();
        assert!(resolved.is_empty());
    }
}
