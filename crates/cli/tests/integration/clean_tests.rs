//! Clean and rebuild command integration tests.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

const SOURCES: &[&str] = &["src/main.cpp", "src/util.cpp"];

#[test]
#[serial]
fn clean_removes_build_directory() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  env
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed build"));

  assert!(!env.path().join("build").exists());
  assert!(env.path().join("src/main.cpp").exists());
}

#[test]
#[serial]
fn clean_twice_succeeds() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  env.cmd().arg("clean").assert().success();
  env
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to clean"));
}

#[test]
#[serial]
fn build_after_clean_recompiles_everything() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();
  env.cmd().arg("clean").assert().success();

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 2"));

  assert_eq!(env.compile_invocations().len(), 4);
}

#[test]
#[serial]
fn rebuild_recompiles_up_to_date_sources() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  env
    .cmd()
    .arg("rebuild")
    .assert()
    .success()
    .stdout(predicate::str::contains("Rebuilding app"))
    .stdout(predicate::str::contains("Compiled: 2"));

  assert_eq!(env.compile_invocations().len(), 4);
  assert!(env.path().join("build/app").exists());
}

#[test]
#[serial]
fn rebuild_without_previous_build() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .arg("rebuild")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 2"));
}
