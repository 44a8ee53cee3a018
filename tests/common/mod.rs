// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Repository, Signature};
use git_largest::error::{Error, Result};
use git_largest::repository::{command_line, GitRunner};
use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Whether a `git` executable is available to the tests
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Create a temporary git repository
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // Configure git user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Add files to the repository and create a commit
pub fn add_commit(repo: &Repository, files: &[(&str, &[u8])], message: &str) -> git2::Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();

        index.add_path(Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Remove a file from the repository and create a commit
pub fn remove_file_commit(repo: &Repository, path: &str, message: &str) -> git2::Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let full_path = repo.workdir().unwrap().join(path);
    if full_path.exists() {
        std::fs::remove_file(&full_path).unwrap();
    }

    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(path)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().unwrap().peel_to_commit().unwrap();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
        .unwrap()
}

/// Move every reachable object into a single pack file
pub fn repack(repo_path: &Path) {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo_path)
        .args(["repack", "-a", "-d", "-q"])
        .status()
        .unwrap();
    assert!(status.success(), "git repack failed");
}

/// Check out `HEAD` into a linked worktree at `worktree_path`
pub fn add_worktree(repo_path: &Path, worktree_path: &Path) {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo_path)
        .args(["worktree", "add", "--detach", "-q"])
        .arg(worktree_path)
        .status()
        .unwrap();
    assert!(status.success(), "git worktree add failed");
}

/// Incompressible content, so pack sizes follow content sizes
pub fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

/// 40-char hex object id made of one repeated digit
pub fn hex(c: char) -> String {
    c.to_string().repeat(40)
}

/// `git verify-pack -v` line for a non-deltified blob
pub fn blob_line(c: char, size: u64, packed_size: u64) -> String {
    format!("{} blob   {} {} 12", hex(c), size, packed_size)
}

/// A scripted git that answers the three queries the pipeline makes
pub struct FakeGit {
    git_dir: TempDir,
    verify_pack: String,
    rev_list: String,
    failing: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    /// A repository with one pack whose listing is `verify_pack`
    pub fn new(verify_pack: &str, rev_list: &str) -> Self {
        let fake = Self::without_packs(rev_list);
        let pack_dir = fake.pack_dir();
        std::fs::create_dir_all(&pack_dir).unwrap();
        std::fs::write(pack_dir.join("pack-test.idx"), b"").unwrap();
        std::fs::write(pack_dir.join("pack-test.pack"), b"").unwrap();
        Self {
            verify_pack: verify_pack.to_string(),
            ..fake
        }
    }

    /// A repository with no pack files at all
    pub fn without_packs(rev_list: &str) -> Self {
        Self {
            git_dir: TempDir::new().unwrap(),
            verify_pack: String::new(),
            rev_list: rev_list.to_string(),
            failing: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make the given subcommand exit with status 128
    pub fn failing(mut self, subcommand: &'static str) -> Self {
        self.failing = Some(subcommand);
        self
    }

    /// The directory `rev-parse --git-path objects/pack` reports
    pub fn pack_dir(&self) -> PathBuf {
        self.git_dir.path().join("objects").join("pack")
    }

    /// Subcommands run so far, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split_whitespace().nth(1).unwrap_or("").to_string())
            .collect()
    }
}

impl GitRunner for FakeGit {
    async fn run(&self, args: &[OsString]) -> Result<String> {
        let command = command_line(args);
        self.calls.borrow_mut().push(command.clone());

        let subcommand = args.first().and_then(|a| a.to_str()).unwrap_or("");
        if self.failing == Some(subcommand) {
            return Err(Error::ExternalCommand {
                command,
                status: "exit status: 128".to_string(),
                stderr: "fatal: scripted failure".to_string(),
            });
        }

        match subcommand {
            "rev-parse" => Ok(format!("{}\n", self.pack_dir().display())),
            "verify-pack" => Ok(self.verify_pack.clone()),
            "rev-list" => Ok(self.rev_list.clone()),
            _ => Err(Error::ExternalCommand {
                command,
                status: "exit status: 1".to_string(),
                stderr: format!("unexpected subcommand {subcommand}"),
            }),
        }
    }
}
