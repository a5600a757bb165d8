//! Read-only queries against the repository enclosing the project.
//!
//! [`GitService`] discovers a repository by walking upward from a base path. When none is
//! found it stays usable: the branch query answers with [`NOT_A_REPOSITORY`] and the status
//! query with an empty map.

use git2::{Repository, StatusOptions};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Branch text reported when no repository encloses the base path
pub const NOT_A_REPOSITORY: &str = "Not a Git repository";

/// Branch text reported when HEAD points straight at a commit
pub const DETACHED: &str = "DETACHED";

/// Working tree status of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Modified,
    // Added and Deleted are not computed yet; staged changes need their own diff against HEAD.
    Added,
    Deleted,
    Untracked,
}

impl FileStatus {
    /// Short code shown next to file names
    pub fn code(&self) -> &'static str {
        match self {
            FileStatus::Modified => "M",
            FileStatus::Added => "A",
            FileStatus::Deleted => "D",
            FileStatus::Untracked => "??",
        }
    }
}

/// Absolute path (rooted at the working directory) to status
pub type StatusMap = HashMap<PathBuf, FileStatus>;

pub struct GitService {
    repo: Option<Repository>,
    workdir: Option<PathBuf>,
}

impl GitService {
    pub fn new(base_path: &Path) -> Self {
        let repo = match Repository::discover(base_path) {
            Ok(repo) => repo,
            Err(err) => {
                info!("No git repository above {}: {}", base_path.display(), err.message());
                return Self {
                    repo: None,
                    workdir: None,
                };
            }
        };

        let workdir = repo
            .workdir()
            .map(|dir| dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()));
        info!("Using git repository at {}", repo.path().display());

        Self {
            repo: Some(repo),
            workdir,
        }
    }

    pub fn has_repository(&self) -> bool {
        self.repo.is_some()
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// Name of the checked-out branch, or one of the sentinels
    pub fn current_branch(&self) -> String {
        let Some(repo) = &self.repo else {
            return NOT_A_REPOSITORY.to_string();
        };

        // HEAD is read without resolving it so that a branch with no commits still has a name.
        let head = match repo.find_reference("HEAD") {
            Ok(head) => head,
            Err(err) => {
                warn!("Could not read HEAD: {}", err.message());
                return DETACHED.to_string();
            }
        };

        match head.symbolic_target() {
            Some(target) => target
                .strip_prefix("refs/heads/")
                .unwrap_or(target)
                .to_string(),
            None => DETACHED.to_string(),
        }
    }

    /// Modified and untracked files, keyed by absolute path
    pub fn file_statuses(&self) -> StatusMap {
        let (Some(repo), Some(workdir)) = (&self.repo, &self.workdir) else {
            return StatusMap::new();
        };

        let modified = modified_paths(repo).unwrap_or_else(|err| {
            warn!("Index diff failed: {}", err.message());
            Vec::new()
        });
        let untracked = untracked_paths(repo).unwrap_or_else(|err| {
            warn!("Untracked scan failed: {}", err.message());
            Vec::new()
        });
        debug!(
            "{} modified and {} untracked paths",
            modified.len(),
            untracked.len()
        );

        merge_statuses(workdir, modified, untracked)
    }
}

/// Paths whose working tree content differs from the index
fn modified_paths(repo: &Repository) -> Result<Vec<PathBuf>, git2::Error> {
    let diff = repo.diff_index_to_workdir(None, None)?;
    Ok(diff
        .deltas()
        .filter_map(|delta| delta.old_file().path().map(Path::to_path_buf))
        .collect())
}

fn untracked_paths(repo: &Repository) -> Result<Vec<PathBuf>, git2::Error> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(statuses
        .iter()
        .filter(|entry| entry.status().is_wt_new())
        .filter_map(|entry| entry.path().map(PathBuf::from))
        .collect())
}

/// Build the status map. Untracked entries are applied last and win over modified ones.
pub fn merge_statuses(
    workdir: &Path,
    modified: impl IntoIterator<Item = PathBuf>,
    untracked: impl IntoIterator<Item = PathBuf>,
) -> StatusMap {
    let mut statuses = StatusMap::new();
    for path in modified {
        statuses.insert(workdir.join(path), FileStatus::Modified);
    }
    for path in untracked {
        statuses.insert(workdir.join(path), FileStatus::Untracked);
    }
    statuses
}
