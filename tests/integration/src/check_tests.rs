//! End-to-end tests for `drift check` against real git repositories.

use std::path::Path;

use assert_cmd::Command;
use git2::Repository;
use predicates::prelude::*;
use tempfile::TempDir;

use drift_manifest::{LockedDependency, Lockfile, Manifest, ManifestDependency};

const DEP: &str = "deps.example/a";

fn commit_file(repo: &Repository, name: &str, content: &str) -> git2::Oid {
    let workdir = repo.workdir().unwrap();
    std::fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, name, &tree, &parents)
        .unwrap()
}

struct Fixture {
    project: TempDir,
    upstream: TempDir,
    first: git2::Oid,
    second: git2::Oid,
}

impl Fixture {
    fn new() -> Self {
        let upstream = TempDir::new().unwrap();
        let repo = Repository::init(upstream.path()).unwrap();
        let first = commit_file(&repo, "a.txt", "one");
        let second = commit_file(&repo, "b.txt", "two");

        Self {
            project: TempDir::new().unwrap(),
            upstream,
            first,
            second,
        }
    }

    fn manifest(&self) -> Manifest {
        Manifest {
            imports: vec![ManifestDependency {
                name: DEP.to_string(),
                constraint: "*".to_string(),
                repo: Some(self.upstream.path().to_str().unwrap().to_string()),
            }],
            dev_imports: vec![],
        }
    }

    fn lockfile(&self, reference: git2::Oid) -> Lockfile {
        let manifest = self.manifest();
        Lockfile {
            hash: manifest.content_hash(),
            imports: vec![LockedDependency {
                name: DEP.to_string(),
                reference: reference.to_string(),
                repo: None,
            }],
            dev_imports: vec![],
        }
    }

    fn write_files(&self, manifest: &Manifest, lockfile: &Lockfile) {
        std::fs::write(
            self.project.path().join("deps.yaml"),
            serde_yaml::to_string(manifest).unwrap(),
        )
        .unwrap();
        std::fs::write(
            self.project.path().join("deps.lock"),
            serde_yaml::to_string(lockfile).unwrap(),
        )
        .unwrap();
    }

    /// Clone the upstream into the vendor tree, pinned to `revision`.
    fn vendor_checkout(&self, revision: git2::Oid) {
        let dest = self
            .project
            .path()
            .join("vendor")
            .join("deps.example")
            .join("a");
        let repo = Repository::clone(self.upstream.path().to_str().unwrap(), &dest).unwrap();
        repo.set_head_detached(revision).unwrap();
        repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))
            .unwrap();
    }

    fn check(&self) -> Command {
        let mut cmd = Command::cargo_bin("drift").unwrap();
        cmd.current_dir(self.project.path()).arg("check");
        cmd
    }
}

#[test]
fn matched_checkout_reports_ok_and_exits_zero() {
    let fixture = Fixture::new();
    fixture.write_files(&fixture.manifest(), &fixture.lockfile(fixture.second));
    fixture.vendor_checkout(fixture.second);

    fixture
        .check()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[Ok] {DEP}")));
}

#[test]
fn missing_checkout_is_reported_but_exits_zero() {
    let fixture = Fixture::new();
    fixture.write_files(&fixture.manifest(), &fixture.lockfile(fixture.second));

    fixture
        .check()
        .assert()
        .success()
        .stdout(predicate::str::contains("[Not Existed]"))
        .stdout(predicate::str::contains("1 of 1 checked dependencies drifted"));
}

#[test]
fn mismatched_checkout_shows_both_revisions() {
    let fixture = Fixture::new();
    fixture.write_files(&fixture.manifest(), &fixture.lockfile(fixture.second));
    fixture.vendor_checkout(fixture.first);

    fixture
        .check()
        .assert()
        .success()
        .stdout(predicate::str::contains("[Not Matched]"))
        .stdout(predicate::str::contains(fixture.second.to_string()))
        .stdout(predicate::str::contains(fixture.first.to_string()));
}

#[test]
fn stale_lock_aborts_with_nonzero_exit() {
    let fixture = Fixture::new();
    let mut lockfile = fixture.lockfile(fixture.second);
    lockfile.hash = "sha256:stale".to_string();
    fixture.write_files(&fixture.manifest(), &lockfile);
    fixture.vendor_checkout(fixture.second);

    fixture
        .check()
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn conflicting_lock_pins_abort_with_nonzero_exit() {
    let fixture = Fixture::new();
    let mut lockfile = fixture.lockfile(fixture.second);
    lockfile.imports.push(LockedDependency {
        name: DEP.to_string(),
        reference: fixture.first.to_string(),
        repo: None,
    });
    fixture.write_files(&fixture.manifest(), &lockfile);

    fixture
        .check()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conflicting"));
}

#[test]
fn missing_lockfile_aborts_with_nonzero_exit() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.project.path().join("deps.yaml"),
        serde_yaml::to_string(&fixture.manifest()).unwrap(),
    )
    .unwrap();

    fixture
        .check()
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn lock_only_dependency_is_never_checked() {
    let fixture = Fixture::new();
    let mut lockfile = fixture.lockfile(fixture.second);
    lockfile.imports.push(LockedDependency {
        name: "deps.example/ghost".to_string(),
        reference: "eeeeeeeeeeee".to_string(),
        repo: None,
    });
    fixture.write_files(&fixture.manifest(), &lockfile);
    fixture.vendor_checkout(fixture.second);

    fixture
        .check()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[Ok] {DEP}")))
        .stdout(predicate::str::contains("ghost").not());
}

#[test]
fn json_output_is_machine_readable() {
    let fixture = Fixture::new();
    fixture.write_files(&fixture.manifest(), &fixture.lockfile(fixture.second));
    fixture.vendor_checkout(fixture.second);

    let output = fixture.check().arg("--json").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["name"], DEP);
    assert_eq!(outcomes[0]["classification"]["state"], "matched");
}

#[test]
fn lock_path_override_is_honored() {
    let fixture = Fixture::new();
    let manifest = fixture.manifest();
    std::fs::write(
        fixture.project.path().join("deps.yaml"),
        serde_yaml::to_string(&manifest).unwrap(),
    )
    .unwrap();
    std::fs::write(
        fixture.project.path().join("pinned.lock"),
        serde_yaml::to_string(&fixture.lockfile(fixture.second)).unwrap(),
    )
    .unwrap();
    fixture.vendor_checkout(fixture.second);

    fixture
        .check()
        .args(["--lock", "pinned.lock"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[Ok] {DEP}")));
}
