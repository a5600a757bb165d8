// Common fixtures: scratch projects and git repositories

use git2::{Commit, IndexAddOption, Oid, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory plus its canonical path, matching what the binary passes around
#[allow(dead_code)]
pub fn project_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    (temp_dir, root)
}

/// Write `content` to `root/rel`, creating parent directories
#[allow(dead_code)]
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Fresh repository whose unborn HEAD points at `main`
#[allow(dead_code)]
pub fn init_repo(root: &Path) -> Repository {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    Repository::init_opts(root, &opts).unwrap()
}

/// Stage every file in the working tree and commit it on HEAD
#[allow(dead_code)]
pub fn commit_all(repo: &Repository, message: &str) -> Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();

    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .unwrap()
}

/// Point HEAD straight at a commit
#[allow(dead_code)]
pub fn detach_head(repo: &Repository, commit: Oid) {
    repo.set_head_detached(commit).unwrap();
}
