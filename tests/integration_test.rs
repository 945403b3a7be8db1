use assert_cmd::Command;
use assert_cmd::cargo;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// Stub installer that records its target argument and always fails.
/// Run as `sh install <target>` from the work directory, so `--pm sh`
/// turns each invocation into a call of this script.
const FAILING_INSTALLER: &str = "echo \"$1\" >> calls.log\nexit 1\n";

fn workdir_with_stub(requirements: &str) -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("install"), FAILING_INSTALLER).unwrap();
    std::fs::write(dir.path().join("requirements.txt"), requirements).unwrap();
    dir
}

fn recorded_calls(dir: &Path) -> Vec<String> {
    match std::fs::read_to_string(dir.join("calls.log")) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

fn pyreqs(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("pyreqs"));
    cmd.current_dir(dir)
        .env_remove("PYREQS_PM")
        .env_remove("PYREQS_FILE")
        .env("RUST_LOG", "warn");
    cmd
}

#[cfg(unix)]
#[test]
fn test_failing_installer_does_not_halt_run() {
    let dir = workdir_with_stub("jupyterlab\npydantic==2.2.0\nFlash\njupyterlab\n");

    pyreqs(dir.path())
        .args(["--pm", "sh", "-f", "requirements.txt"])
        .assert()
        .success();

    assert_eq!(
        recorded_calls(dir.path()),
        vec!["jupyterlab", "pydantic==2.2.0", "Flash", "jupyterlab"]
    );
}

#[cfg(unix)]
#[test]
fn test_fail_fast_stops_after_first_failure() {
    let dir = workdir_with_stub("numpy\npandas\n");

    pyreqs(dir.path())
        .args(["--pm", "sh", "-f", "requirements.txt", "--on-failure", "fail-fast"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to install numpy"));

    assert_eq!(recorded_calls(dir.path()), vec!["numpy"]);
}

#[cfg(unix)]
#[test]
fn test_log_policy_warns_and_continues() {
    let dir = workdir_with_stub("numpy\npandas\n");

    pyreqs(dir.path())
        .args(["--pm", "sh", "-f", "requirements.txt", "--on-failure", "log"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Failed to install numpy"))
        .stderr(predicates::str::contains("Failed to install pandas"));

    assert_eq!(recorded_calls(dir.path()), vec!["numpy", "pandas"]);
}

#[cfg(unix)]
#[test]
fn test_json_report_lists_failures() {
    let dir = workdir_with_stub("seaborn\n");

    let output = pyreqs(dir.path())
        .args(["--pm", "sh", "-f", "requirements.txt", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcome = &report["outcomes"][0];
    assert_eq!(outcome["requirement"], "seaborn");
    assert_eq!(outcome["status"], "failed");
    assert_eq!(outcome["code"], 1);
    assert_eq!(outcome["command"][0], "sh");
    assert_eq!(outcome["command"][1], "install");
}

#[test]
fn test_dry_run_prints_builtin_commands_in_order() {
    let dir = tempdir().unwrap();

    let output = pyreqs(dir.path()).arg("--dry-run").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "pip install jupyterlab");
    assert_eq!(lines[10], "pip install pydantic==2.2.0");
    assert_eq!(lines[11], "pip install pydantic_core==2.6.0");
    assert_eq!(lines[13], "pip install Flash");
    assert_eq!(lines[19], "pip install typing_extensions==4.7.1");
    assert_eq!(lines[20], "pip install ipython");
}

#[test]
fn test_dry_run_json_output_is_pure_json() {
    let dir = tempdir().unwrap();

    let output = pyreqs(dir.path()).args(["-n", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 21);
    assert_eq!(outcomes[10]["status"], "planned");
    assert_eq!(outcomes[10]["command"][2], "pydantic==2.2.0");
}

#[test]
fn test_missing_package_manager_is_an_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("requirements.txt"), "numpy\n").unwrap();

    pyreqs(dir.path())
        .args(["--pm", "pyreqs-no-such-package-manager", "-f", "requirements.txt"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("pyreqs-no-such-package-manager"));
}

#[test]
fn test_invalid_requirements_file_reports_line() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("requirements.txt"), "numpy\npydantic==\n").unwrap();

    pyreqs(dir.path())
        .args(["-f", "requirements.txt", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("line 2"));
}

#[test]
fn test_missing_requirements_file_is_an_error() {
    let dir = tempdir().unwrap();

    pyreqs(dir.path())
        .args(["-f", "does-not-exist.txt", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("does-not-exist.txt"));
}

#[test]
fn test_version_comes_from_build_script() {
    let dir = tempdir().unwrap();

    pyreqs(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("pyreqs "))
        .stdout(predicates::str::contains(env!("PYREQS_VERSION")));
}
