use std::fs;

use crate::common::{describe, healthy_repo, read, run_in};

#[test]
fn pass_badge_flips_to_fail_and_keeps_content() {
    let temp = tempfile::tempdir().expect("create temp dir");
    fs::write(
        temp.path().join("README.md"),
        "✅ Repo Health: PASS\n\n# Demo\n\nSome text.\n",
    )
    .expect("write README");

    let output = run_in(temp.path());
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));

    assert_eq!(
        read(temp.path(), "README.md"),
        "❌ Repo Health: FAIL\n\n# Demo\n\nSome text.\n"
    );
}

#[test]
fn badge_is_inserted_above_existing_content() {
    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());
    let original = "# Demo\n\nLine two.\n";
    fs::write(temp.path().join("README.md"), original).expect("write README");

    let output = run_in(temp.path());
    assert!(output.status.success(), "{}", describe(&output));

    assert_eq!(
        read(temp.path(), "README.md"),
        format!("✅ Repo Health: PASS\n\n{original}")
    );
}

#[test]
fn repeated_runs_keep_a_single_badge() {
    let temp = tempfile::tempdir().expect("create temp dir");
    healthy_repo(temp.path());
    fs::write(temp.path().join("README.md"), "# Demo\n").expect("write README");

    run_in(temp.path());
    run_in(temp.path());

    assert_eq!(read(temp.path(), "README.md"), "✅ Repo Health: PASS\n\n# Demo\n");
}

#[test]
fn missing_readme_is_not_created() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let output = run_in(temp.path());
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    assert!(!temp.path().join("README.md").exists());
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("Failed to read"),
        "missing README must not be reported as an error: {}",
        describe(&output)
    );
    assert!(temp.path().join("health/report.md").is_file());
}
