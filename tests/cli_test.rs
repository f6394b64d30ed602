use assert_cmd::Command;
use predicates::prelude::*;

fn gcovr() -> Command {
    Command::cargo_bin("gcovr").expect("binary should be built")
}

#[test]
fn version_flag_prints_version_and_exits_cleanly() {
    gcovr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "gcovr ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn help_prints_usage_on_stdout() {
    gcovr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: gcovr [options]"))
        .stdout(predicate::str::contains("--gcov-executable"));
}

#[test]
fn unknown_option_fails_with_usage_error() {
    gcovr()
        .arg("--bogus-flag")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown option '--bogus-flag'"))
        .stderr(predicate::str::contains("Usage: gcovr [options]"));
}

#[test]
fn trailing_value_option_fails_with_usage_error() {
    gcovr()
        .arg("--filter")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'--filter' requires a value"));
}

#[test]
fn quiet_run_resolves_silently() {
    gcovr().assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn verbose_run_echoes_gcov_executable_from_environment() {
    gcovr()
        .env("GCOV", "custom-gcov")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcov executable: custom-gcov"));
}

#[test]
fn verbose_run_falls_back_to_default_gcov() {
    gcovr()
        .env_remove("GCOV")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcov executable: gcov"));
}

#[test]
fn gcov_executable_flag_wins_over_environment() {
    gcovr()
        .env("GCOV", "other")
        .args(["-v", "--gcov-executable", "mygcov"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gcov executable: mygcov"));
}

#[test]
fn output_path_is_absolutized_against_working_directory() {
    let workdir = tempfile::tempdir().expect("tempdir should be created");
    // canonicalize so the comparison survives a symlinked temp directory
    let expected = workdir
        .path()
        .canonicalize()
        .expect("tempdir should canonicalize")
        .join("report.txt");

    gcovr()
        .current_dir(workdir.path())
        .args(["-v", "-o", "report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "writing report to: {}",
            expected.display()
        )));
}

#[test]
fn search_paths_are_passed_through_in_order() {
    gcovr()
        .args(["foo.cpp", "-v", "bar.cpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search paths: foo.cpp, bar.cpp"));
}
