//! Build command integration tests.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

const SOURCES: &[&str] = &["src/main.cpp", "src/util.cpp"];

#[test]
#[serial]
fn first_build_compiles_every_source() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build successful"))
    .stdout(predicate::str::contains("Compiled: 2"));

  assert!(env.path().join("build/main.o").exists());
  assert!(env.path().join("build/util.o").exists());
  assert!(env.path().join("build/app").exists());

  let compiles = env.compile_invocations();
  assert_eq!(compiles.len(), 2);
  assert!(compiles[0].ends_with("-std=c++17 -O2 -c src/main.cpp -o build/main.o"));
  assert!(compiles[1].ends_with("-c src/util.cpp -o build/util.o"));
  assert_eq!(env.link_invocations(), ["build/main.o build/util.o -o build/app"]);
}

#[test]
#[serial]
fn build_is_the_default_command() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Build successful"));

  assert!(env.path().join("build/app").exists());
}

#[test]
#[serial]
fn second_build_skips_up_to_date_sources() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env.cmd().arg("build").assert().success();

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Up to date"))
    .stdout(predicate::str::contains("Compiled: 0"))
    .stderr(predicate::str::contains("skipping (up to date)"));

  assert_eq!(env.compile_invocations().len(), 2);
  // relinks even when nothing was recompiled
  assert_eq!(env.link_invocations().len(), 2);
}

#[test]
#[serial]
fn modified_source_is_recompiled() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  env.touch_later("src/util.cpp");

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 1"))
    .stdout(predicate::str::contains("Up to date: 1"));

  let compiles = env.compile_invocations();
  assert_eq!(compiles.len(), 3);
  assert!(compiles[2].contains("-c src/util.cpp"));
}

#[test]
#[serial]
fn deleted_object_is_recompiled() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  std::fs::remove_file(env.path().join("build/main.o")).unwrap();

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 1"));

  assert!(env.compile_invocations()[2].contains("-c src/main.cpp"));
}

#[test]
#[serial]
fn compile_failure_stops_the_build() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .arg("build")
    .env("FAKECXX_FAIL", "src/main.cpp")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to compile src/main.cpp"));

  // util.cpp is never attempted and nothing is linked
  assert_eq!(env.invocations().len(), 1);
  assert!(!env.path().join("build/app").exists());
}

#[test]
#[serial]
fn link_failure_is_reported() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .arg("build")
    .env("FAKECXX_FAIL", "build/app")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to link build/app"));

  assert_eq!(env.compile_invocations().len(), 2);
}

#[test]
#[serial]
fn deleted_source_with_existing_object_fails() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  env.cmd().arg("build").assert().success();

  std::fs::remove_file(env.path().join("src/util.cpp")).unwrap();

  env
    .cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("source file does not exist: src/util.cpp"));

  assert_eq!(env.link_invocations().len(), 1);
}

#[test]
#[serial]
fn missing_compiler_fails() {
  let env = TestEnv::new();
  std::fs::write(
    env.path().join("build.json"),
    r#"{ "project_name": "app", "compiler": "./no-such-compiler", "source_files": ["src/main.cpp"] }"#,
  )
  .unwrap();

  env
    .cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to start ./no-such-compiler"));
}

#[test]
#[serial]
fn directory_entries_are_expanded() {
  let env = TestEnv::new();
  env.write_file("src/README.txt", "not a source");
  env.write_file("src/nested/deep.cpp", "int deep() { return 2; }\n");
  env.write_config(&["src"], "");

  env
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 2"));

  assert_eq!(env.link_invocations(), ["build/main.o build/util.o -o build/app"]);
}

#[test]
#[serial]
fn flags_and_search_paths_are_passed_through() {
  let env = TestEnv::new();
  env.write_config(
    &["src/main.cpp"],
    r#""debug": true, "optimization": "O0", "cpp_standard": "c++20", "include_dirs": ["include"], "library_dirs": ["lib"], "libraries": ["m"], "compile_flags": ["-Wall"], "link_flags": ["-pthread"], "output_name": "tool", "build_dir": "out""#,
  );

  env.cmd().arg("build").assert().success();

  assert_eq!(
    env.compile_invocations(),
    ["-std=c++20 -O0 -g -Iinclude -Wall -c src/main.cpp -o out/main.o"]
  );
  assert_eq!(env.link_invocations(), ["out/main.o -Llib -lm -pthread -o out/tool"]);
  assert!(env.path().join("out/tool").exists());
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn library_output_is_shared_object() {
  let env = TestEnv::new();
  env.write_config(SOURCES, r#""output_type": "library""#);

  env.cmd().arg("build").assert().success();

  assert_eq!(
    env.link_invocations(),
    ["build/main.o build/util.o -o build/libapp.so -shared"]
  );
  assert!(env.path().join("build/libapp.so").exists());
}

#[test]
#[serial]
fn verbose_prints_configuration() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");

  env
    .cmd()
    .args(["--verbose", "build"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Build configuration"))
    .stdout(predicate::str::contains("Source files (2)"))
    .stdout(predicate::str::contains("C++ standard: c++17"))
    .stdout(predicate::str::contains("Type: executable"));
}

#[test]
#[serial]
fn config_flag_selects_another_file() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  std::fs::rename(env.path().join("build.json"), env.path().join("release.json")).unwrap();

  env.cmd().args(["-c", "release.json", "build"]).assert().success();

  assert!(env.path().join("build/app").exists());
}

#[test]
#[serial]
fn positional_config_file_is_built() {
  let env = TestEnv::new();
  env.write_config(SOURCES, "");
  std::fs::rename(env.path().join("build.json"), env.path().join("release.json")).unwrap();

  env
    .cmd()
    .arg("release.json")
    .assert()
    .success()
    .stdout(predicate::str::contains("Compiled: 2"));

  env
    .cmd()
    .args(["clean", "release.json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed build"));
}
