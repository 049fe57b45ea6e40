//! End-to-end tests for the `profile-resolve` binary.
//!
//! Every test builds a profile tree in a temporary directory and runs the
//! compiled binary against it using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use profile_test_utils::TestProfileTree;

/// Command for the binary, isolated from the user's settings and environment
fn resolve_cmd(tree: &TestProfileTree) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("profile-resolve"));
    cmd.current_dir(tree.root())
        .env("XDG_CONFIG_HOME", tree.root().join(".config-home"))
        .env_remove("PROFILE_RESOLVER_PROFILE")
        .env_remove("PROFILE_RESOLVER_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn gentoo_like_tree() -> TestProfileTree {
    let tree = TestProfileTree::new();
    tree.write(
        "base",
        "make.defaults",
        "USE=\"acl ssl\"\nCHOST=\"x86_64-pc-linux-gnu\"\n",
    );
    tree.write("base", "use.mask", "selinux\n");
    tree.write("base", "package.use", "dev-lang/python sqlite\n");
    tree.write("amd64", "make.defaults", "USE=\"${USE} -acl multilib\"\n");
    tree.write("amd64", "package.use", "dev-lang/python -sqlite tk\n");
    tree.parents("amd64", &["base"]);
    tree
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_mentions_commands() {
    let tree = TestProfileTree::new();
    resolve_cmd(&tree)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_names_binary() {
    let tree = TestProfileTree::new();
    resolve_cmd(&tree)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile-resolve"));
}

#[test]
fn no_command_shows_help_hint() {
    let tree = TestProfileTree::new();
    resolve_cmd(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("profile-resolve --help"));
}

// ============================================================================
// resolve
// ============================================================================

#[test]
fn resolve_writes_merged_files() {
    let tree = gentoo_like_tree();

    resolve_cmd(&tree)
        .args(["resolve", "amd64", "-o", "merged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 profile(s)"))
        .stdout(predicate::str::contains("make.defaults"));

    assert_eq!(
        tree.read("merged/make.defaults"),
        "CHOST=\"x86_64-pc-linux-gnu\"\nUSE=\"-acl multilib ssl\"\n"
    );
    assert_eq!(tree.read("merged/package.use"), "dev-lang/python -sqlite tk\n");
    assert_eq!(tree.read("merged/use.mask"), "selinux\n");
}

#[test]
fn resolve_twice_is_byte_identical() {
    let tree = gentoo_like_tree();

    for out in ["first", "second"] {
        resolve_cmd(&tree)
            .args(["resolve", "amd64", "--output", out])
            .assert()
            .success();
    }

    assert_eq!(tree.list("first"), tree.list("second"));
    for name in tree.list("first") {
        assert_eq!(
            tree.read(&format!("first/{name}")),
            tree.read(&format!("second/{name}"))
        );
    }
}

#[test]
fn resolve_no_recursive_skips_parents() {
    let tree = gentoo_like_tree();

    resolve_cmd(&tree)
        .args(["resolve", "amd64", "-o", "out", "--no-recursive"])
        .assert()
        .success();

    assert_eq!(tree.list("out"), vec!["make.defaults", "package.use"]);
    assert_eq!(tree.read("out/make.defaults"), "USE=\"-acl multilib\"\n");
}

#[test]
fn resolve_uses_settings_file_and_env() {
    let tree = gentoo_like_tree();
    fs::write(
        tree.root().join("resolver.toml"),
        "[resolve]\nprofile = \"amd64\"\noutput = \"from-settings\"\n",
    )
    .unwrap();

    resolve_cmd(&tree)
        .args(["--config", "resolver.toml", "resolve"])
        .assert()
        .success();
    tree.assert_file_exists("from-settings/make.defaults");

    resolve_cmd(&tree)
        .env("PROFILE_RESOLVER_OUTPUT", "from-env")
        .args(["--config", "resolver.toml", "resolve"])
        .assert()
        .success();
    tree.assert_file_exists("from-env/make.defaults");
}

#[test]
fn resolve_without_output_fails() {
    let tree = gentoo_like_tree();

    resolve_cmd(&tree)
        .args(["resolve", "amd64"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No output directory"));
}

#[test]
fn resolve_missing_profile_fails() {
    let tree = TestProfileTree::new();

    resolve_cmd(&tree)
        .args(["resolve", "nope", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile directory not found"));
}

#[test]
fn resolve_parse_error_writes_nothing() {
    let tree = gentoo_like_tree();
    tree.write("broken", "make.defaults", "USE \"x\"\n");
    tree.parents("broken", &["amd64"]);

    resolve_cmd(&tree)
        .args(["resolve", "broken", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("make.defaults"));

    tree.assert_file_not_exists("out");
}

#[test]
fn resolve_quote_in_value_fails() {
    let tree = TestProfileTree::new();
    tree.write("p", "make.defaults", "MSG='a \"quoted\" word'\n");

    resolve_cmd(&tree)
        .args(["resolve", "p", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MSG"));

    assert!(tree.list("out").is_empty());
}

// ============================================================================
// show
// ============================================================================

#[test]
fn show_prints_canonical_text() {
    let tree = gentoo_like_tree();

    resolve_cmd(&tree)
        .args(["show", "amd64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# package.use"))
        .stdout(predicate::str::contains("dev-lang/python -sqlite tk"))
        .stdout(predicate::str::contains("USE=\"-acl multilib ssl\""));

    tree.assert_file_not_exists("out");
}

#[test]
fn show_json_is_parseable() {
    let tree = gentoo_like_tree();

    let output = resolve_cmd(&tree)
        .args(["show", "amd64", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["use.mask"]["entries"]["selinux"], true);
    assert_eq!(value["make.defaults"]["entries"]["CHOST"], "x86_64-pc-linux-gnu");
    assert_eq!(value["make.defaults"]["entries"]["USE"]["acl"], false);
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_lists_profiles_parent_first() {
    let tree = gentoo_like_tree();

    let output = resolve_cmd(&tree)
        .args(["check", "amd64"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let base = stdout.find("   1. ").unwrap();
    let amd64 = stdout.find("   2. ").unwrap();
    assert!(base < amd64);
    assert!(stdout.contains("use.mask (flag)"), "stdout: {stdout}");
    assert!(stdout.contains("2 profile(s), 5 file(s)"), "stdout: {stdout}");
}

#[test]
fn check_reports_cycle() {
    let tree = TestProfileTree::new();
    tree.parents("a", &["b"]);
    tree.parents("b", &["a"]);

    resolve_cmd(&tree)
        .args(["check", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle"));
}
