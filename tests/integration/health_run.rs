use std::fs;

use serde_json::Value;

use crate::common::{describe, healthy_repo, read, run_in};

#[test]
fn healthy_repository_exits_zero_with_empty_lists() {
    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());

    let output = run_in(temp.path());
    assert_eq!(output.status.code(), Some(0), "{}", describe(&output));

    let report: Value =
        serde_json::from_str(&read(temp.path(), "health/report.json")).expect("valid JSON");
    assert_eq!(report["status"], "PASS");
    assert_eq!(report["missing_files"], Value::Array(vec![]));
    assert_eq!(report["missing_dirs"], Value::Array(vec![]));
}

#[test]
fn partial_repository_fails_with_ordered_missing_lists() {
    let temp = tempfile::tempdir().expect("create temp dir");
    fs::write(temp.path().join("README.md"), "# Demo\n").expect("write README");
    fs::create_dir_all(temp.path().join("tests")).expect("create tests dir");

    let output = run_in(temp.path());
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Repo health check failed"),
        "{}",
        describe(&output)
    );

    assert_eq!(
        read(temp.path(), "health/report.json"),
        "{\n  \"status\": \"FAIL\",\n  \"missing_files\": [\n    \"LICENSE\",\n    \".gitignore\"\n  ],\n  \"missing_dirs\": [\n    \".github/workflows\"\n  ]\n}"
    );
    let md = read(temp.path(), "health/report.md");
    assert!(
        md.contains("## Missing Files\n- LICENSE\n- .gitignore\n"),
        "report.md:\n{md}"
    );
    assert!(
        md.contains("## Missing Directories\n- .github/workflows\n"),
        "report.md:\n{md}"
    );
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let temp = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(temp.path().join("tests")).expect("create tests dir");

    run_in(temp.path());
    let json_first = fs::read(temp.path().join("health/report.json")).expect("read json");
    let md_first = fs::read(temp.path().join("health/report.md")).expect("read md");

    run_in(temp.path());
    assert_eq!(
        fs::read(temp.path().join("health/report.json")).expect("read json"),
        json_first
    );
    assert_eq!(
        fs::read(temp.path().join("health/report.md")).expect("read md"),
        md_first
    );
}

#[test]
fn existing_output_directory_is_reused() {
    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());
    fs::create_dir_all(temp.path().join("health")).expect("create health dir");
    fs::write(temp.path().join("health/report.md"), "stale").expect("write stale report");

    let output = run_in(temp.path());
    assert!(output.status.success(), "{}", describe(&output));
    assert!(read(temp.path(), "health/report.md").starts_with("# Repo Health Report\n"));
}

#[cfg(unix)]
#[test]
fn unwritable_output_directory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());
    let health = temp.path().join("health");
    fs::create_dir_all(&health).expect("create health dir");
    fs::set_permissions(&health, fs::Permissions::from_mode(0o555)).expect("chmod");

    // Root ignores permission bits, so only assert when the directory is really read-only.
    let writable = tempfile::NamedTempFile::new_in(&health).is_ok();
    let output = run_in(temp.path());
    fs::set_permissions(&health, fs::Permissions::from_mode(0o755)).expect("restore chmod");

    if !writable {
        assert_eq!(output.status.code(), Some(2), "{}", describe(&output));
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("report.json"),
            "{}",
            describe(&output)
        );
    }
}

#[cfg(unix)]
#[test]
fn unreadable_required_parent_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());
    let github = temp.path().join(".github");
    fs::set_permissions(&github, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Root ignores permission bits, so only assert when access is really denied.
    let denied = github.join("workflows").try_exists().is_err();
    let output = run_in(temp.path());
    fs::set_permissions(&github, fs::Permissions::from_mode(0o755)).expect("restore chmod");

    if denied {
        assert_eq!(output.status.code(), Some(2), "{}", describe(&output));
        assert!(
            String::from_utf8_lossy(&output.stderr).contains(".github/workflows"),
            "{}",
            describe(&output)
        );
        assert!(!temp.path().join("health").exists());
    }
}
