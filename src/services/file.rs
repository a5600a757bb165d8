// services/file.rs - Project walk, text file IO and fuzzy file ranking

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ignore::WalkBuilder;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory names pruned from the project walk
pub const IGNORE_DIRS: &[&str] = &[".git", "__pycache__", "venv", ".venv", "node_modules"];

/// File names skipped by the project walk
pub const IGNORE_FILES: &[&str] = &[".DS_Store"];

/// Number of search results kept when the caller has no preference
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Error reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file found by the project walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub parent: PathBuf,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { path, name, parent }
    }
}

/// A ranked match; `score` is in `0..=100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub entry: FileEntry,
    pub score: u8,
}

pub struct FileService {
    matcher: SkimMatcherV2,
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileService {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Walk `root` recursively and return every file outside the ignored directories.
    ///
    /// Order is traversal order. Entries that cannot be read are skipped.
    pub fn list_project_files(&self, root: &Path) -> Vec<FileEntry> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && is_ignored_dir(entry.file_name().to_string_lossy().as_ref()))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            if entry.depth() == 0 || entry.path().is_dir() {
                continue;
            }
            if is_ignored_file(entry.file_name().to_string_lossy().as_ref()) {
                continue;
            }
            files.push(FileEntry::new(entry.into_path()));
        }

        debug!("Project walk of {} found {} files", root.display(), files.len());
        files
    }

    /// Read a whole file as UTF-8 text
    pub fn read_file(&self, path: &Path) -> Result<String, FileError> {
        fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite `path` with `content`.
    ///
    /// There is no temp-file-and-rename step, so a failure part way through can leave a
    /// truncated file behind.
    pub fn write_file(&self, path: &Path, content: &str) -> Result<(), FileError> {
        fs::write(path, content).map_err(|source| {
            warn!("Failed to write {}: {}", path.display(), source);
            FileError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Rank `candidates` against `query` by their full path.
    ///
    /// An empty query yields no results. Otherwise at most `limit` matches come back, best
    /// first; equal scores keep their input order.
    pub fn fuzzy_search(
        &self,
        query: &str,
        candidates: &[FileEntry],
        limit: usize,
    ) -> Vec<SearchResult> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let perfect = self
            .matcher
            .fuzzy_match(query, query)
            .filter(|s| *s > 0)
            .unwrap_or(1);

        let mut scored: Vec<(usize, u8)> = candidates
            .par_iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let haystack = entry.path.to_string_lossy();
                self.matcher
                    .fuzzy_match(&haystack, query)
                    .map(|raw| (idx, normalize_score(raw, perfect)))
            })
            .collect();

        // Stable, so ties stay in input order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(idx, score)| SearchResult {
                entry: candidates[idx].clone(),
                score,
            })
            .collect()
    }
}

fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.contains(&name)
}

fn is_ignored_file(name: &str) -> bool {
    IGNORE_FILES.contains(&name)
}

/// Scale a raw matcher score against the score of the query matched with itself
fn normalize_score(raw: i64, perfect: i64) -> u8 {
    (raw.max(0) * 100 / perfect).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(paths: &[&str]) -> Vec<FileEntry> {
        paths.iter().map(|p| FileEntry::new(PathBuf::from(p))).collect()
    }

    #[test]
    fn test_file_entry_derives_name_and_parent() {
        let entry = FileEntry::new(PathBuf::from("/project/src/main.py"));
        assert_eq!(entry.name, "main.py");
        assert_eq!(entry.parent, PathBuf::from("/project/src"));
    }

    #[test]
    fn test_list_project_files_prunes_ignored_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("src/__pycache__")).unwrap();
        fs::write(root.join("src/main.py"), "print()").unwrap();
        fs::write(root.join("README.md"), "# hi").unwrap();
        fs::write(root.join(".DS_Store"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(root.join("src/__pycache__/main.pyc"), "").unwrap();

        let service = FileService::new();
        let mut names: Vec<String> = service
            .list_project_files(root)
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["README.md".to_string(), "main.py".to_string()]);
    }

    #[test]
    fn test_ignored_name_only_prunes_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("venv"), "not a directory").unwrap();

        let files = FileService::new().list_project_files(temp_dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "venv");
    }

    #[test]
    fn test_read_missing_file_reports_message() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileService::new()
            .read_file(&temp_dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Error reading file:"));
    }

    #[test]
    fn test_read_non_utf8_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(FileService::new().read_file(&path).is_err());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        let service = FileService::new();

        service.write_file(&path, "alpha\nbeta\n").unwrap();
        assert_eq!(service.read_file(&path).unwrap(), "alpha\nbeta\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope/notes.txt");
        assert!(FileService::new().write_file(&path, "x").is_err());
    }

    #[test]
    fn test_fuzzy_search_empty_query() {
        let files = entries(&["/p/main.py", "/p/lib.rs"]);
        assert!(FileService::new().fuzzy_search("", &files, 10).is_empty());
    }

    #[test]
    fn test_fuzzy_search_ranks_matches_first() {
        let files = entries(&["/p/other.go", "/p/main.py", "/p/maintenance.txt"]);
        let results = FileService::new().fuzzy_search("mai", &files, 10);

        let names: Vec<&str> = results.iter().map(|r| r.entry.name.as_str()).collect();
        assert!(names.contains(&"main.py"));
        assert!(names.contains(&"maintenance.txt"));
        if let Some(other) = names.iter().position(|n| *n == "other.go") {
            let main = names.iter().position(|n| *n == "main.py").unwrap();
            let maint = names.iter().position(|n| *n == "maintenance.txt").unwrap();
            assert!(main < other && maint < other);
        }
    }

    #[test]
    fn test_fuzzy_search_respects_limit_and_order() {
        let files = entries(&[
            "/p/a/main.py",
            "/p/b/main.py",
            "/p/c/main.py",
            "/p/d/domain.py",
            "/p/e/remain.txt",
        ]);
        let results = FileService::new().fuzzy_search("main", &files, 3);

        assert!(results.len() <= 3);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(results.iter().all(|r| r.score <= 100));
    }

    #[test]
    fn test_fuzzy_search_ties_keep_input_order() {
        let files = entries(&["/p/a/main.py", "/p/b/main.py"]);
        let results = FileService::new().fuzzy_search("main.py", &files, 10);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].entry.path, PathBuf::from("/p/a/main.py"));
    }

    #[test]
    fn test_normalize_score_bounds() {
        assert_eq!(normalize_score(-5, 50), 0);
        assert_eq!(normalize_score(25, 50), 50);
        assert_eq!(normalize_score(500, 50), 100);
    }
}
