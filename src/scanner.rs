use crate::error::AnalysisError;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["js", "jsx", "ts", "tsx", "py"];

/// Dependency caches, build output and VCS metadata are never scanned.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["node_modules", "dist", ".git"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Lists every supported source file under `root` as absolute paths, sorted
/// by path so runs are repeatable. Entries that fail below the root are
/// skipped with a warning.
pub fn find_source_files(
    root: &Path,
    extra_excludes: &[String],
) -> Result<Vec<PathBuf>, AnalysisError> {
    let inaccessible = |source| AnalysisError::Inaccessible {
        path: root.to_path_buf(),
        source,
    };
    let root = std::path::absolute(root).map_err(inaccessible)?;
    fs::read_dir(&root).map_err(inaccessible)?;

    let excludes: Vec<String> = DEFAULT_EXCLUDES
        .iter()
        .map(|s| s.to_string())
        .chain(extra_excludes.iter().cloned())
        .collect();

    let files = WalkBuilder::new(&root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| excludes.iter().any(|e| e == name)))
        })
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_owned())
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[cfg(unix)]
    fn relative_from_cwd(path: &Path) -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        let mut rel: PathBuf = cwd.components().skip(1).map(|_| "..").collect();
        rel.push(path.strip_prefix("/").unwrap());
        rel
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a/b.tsx")));
        assert!(is_supported(Path::new("script.py")));
        assert!(!is_supported(Path::new("README.md")));
        assert!(!is_supported(Path::new("Makefile")));
    }

    #[test]
    fn test_finds_supported_files_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/b.ts");
        touch(dir.path(), "src/a.js");
        touch(dir.path(), "app.py");
        touch(dir.path(), "notes.md");

        let files = find_source_files(dir.path(), &[]).unwrap();
        assert_eq!(
            relative(dir.path(), &files),
            vec!["app.py", "src/a.js", "src/b.ts"]
        );
    }

    #[test]
    fn test_skips_default_and_extra_excludes() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "node_modules/lib/index.js");
        touch(dir.path(), "dist/bundle.js");
        touch(dir.path(), ".git/hooks/pre-commit.py");
        touch(dir.path(), "vendor/jquery.js");
        touch(dir.path(), "src/main.ts");

        let files = find_source_files(dir.path(), &["vendor".to_string()]).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["src/main.ts"]);
    }

    #[test]
    fn test_ignore_files_are_not_honoured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "generated/\n").unwrap();
        touch(dir.path(), "generated/api.ts");

        let files = find_source_files(dir.path(), &[]).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["generated/api.ts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_root_yields_absolute_paths() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/a.js");
        let root = relative_from_cwd(dir.path());
        assert!(root.is_relative());

        let files = find_source_files(&root, &[]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].is_absolute());
        assert!(files[0].ends_with("src/a.js"));
    }

    #[test]
    fn test_unreadable_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(find_source_files(&dir.path().join("missing"), &[]).is_err());
    }
}
