//! End-to-end tests for the volcanoyt binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn volcanoyt(workdir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("volcanoyt");
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

/// Config pointing every service at the mock server, with the portal disabled.
fn write_mock_config(dir: &Path, server: &MockServer) -> std::path::PathBuf {
    let path = dir.join("volcanoyt.toml");
    let body = format!(
        r#"
[poll]
request_timeout_ms = 2000

[services.web-map]
url = "{map}"

[services.android-app]
url = "{android}"

[services.api]
url = "{api}"

[services.web-portal]
enabled = false
"#,
        map = server.url("/map/version.json"),
        android = server.url("/android/version.json"),
        api = server.url("/api/version.json"),
    );
    fs::write(&path, body).unwrap();
    path
}

fn mock_services(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/map/version.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"version":"1.4.2"}"#);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/android/version.json")
            .query_param_exists("alist_ts");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"versionName":"2.0.0","versionCode":45}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/version.json");
        then.status(500);
    });
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        volcanoyt(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("watch"))
            .stdout(predicate::str::contains("render"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        volcanoyt(dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_zero_interval() {
        let dir = TempDir::new().unwrap();
        volcanoyt(dir.path())
            .args(["--interval-secs", "0", "render", "--offline", "--out", "page.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("poll interval"));
    }

    #[test]
    fn rejects_unknown_service_in_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("volcanoyt.toml"),
            "[services.ios-app]\nurl = \"https://example.com/version.json\"\n",
        )
        .unwrap();

        volcanoyt(dir.path())
            .args(["render", "--offline", "--out", "page.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("ios-app"));
    }

    #[test]
    fn rejects_bad_log_level() {
        let dir = TempDir::new().unwrap();
        volcanoyt(dir.path())
            .args(["--log-level", "loud", "render", "--offline", "--out", "page.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid log level"));
    }
}

mod render {
    use super::*;

    #[test]
    fn offline_render_writes_page_without_badges() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public/index.html");

        volcanoyt(dir.path())
            .args(["render", "--offline", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Why VolcanoYT?"));
        assert!(!html.contains("class=\"cta-badge\""));
    }

    #[test]
    fn render_embeds_polled_versions() {
        let server = MockServer::start();
        mock_services(&server);
        let dir = TempDir::new().unwrap();
        write_mock_config(dir.path(), &server);
        let out = dir.path().join("index.html");

        volcanoyt(dir.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("v1.4.2"));
        assert!(html.contains("volcanoyt-2.0.0.apk"));
        assert!(html.contains("v2.0.0"));
    }
}

mod check {
    use super::*;

    #[test]
    fn json_reports_each_service() {
        let server = MockServer::start();
        mock_services(&server);
        let dir = TempDir::new().unwrap();
        write_mock_config(dir.path(), &server);

        let output = volcanoyt(dir.path())
            .args(["check", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 3);

        let row = |key: &str| {
            rows.iter()
                .find(|r| r["service"] == key)
                .unwrap_or_else(|| panic!("no row for {key}"))
        };
        assert_eq!(row("web-map")["version"], "1.4.2");
        assert_eq!(row("android-app")["version"], "2.0.0");
        assert_eq!(row("api")["status"], "failed");
        assert_eq!(row("api")["kind"], "status");
    }

    #[test]
    fn failures_do_not_fail_the_command() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("unreachable.toml");
        fs::write(
            &config,
            r#"
[poll]
request_timeout_ms = 500

[services.web-map]
url = "http://127.0.0.1:9/version.json"
[services.android-app]
enabled = false
[services.web-portal]
enabled = false
[services.api]
enabled = false
"#,
        )
        .unwrap();

        volcanoyt(dir.path())
            .arg("--config")
            .arg(&config)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Web Maps"))
            .stdout(predicate::str::contains("unavailable"));
    }
}

mod watch {
    use super::*;
    use std::process::{Command as StdCommand, Stdio};
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn keeps_rendered_page_current() {
        let server = MockServer::start();
        mock_services(&server);
        let dir = TempDir::new().unwrap();
        write_mock_config(dir.path(), &server);
        let out = dir.path().join("public/index.html");

        let mut child = StdCommand::new(env!("CARGO_BIN_EXE_volcanoyt"))
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .args(["--interval-secs", "1", "watch", "--render"])
            .arg(&out)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(15);
        let mut html = String::new();
        while Instant::now() < deadline {
            html = fs::read_to_string(&out).unwrap_or_default();
            if html.contains("v1.4.2") && html.contains("v2.0.0") {
                break;
            }
            thread::sleep(Duration::from_millis(50));
        }

        let still_running = child.try_wait().unwrap().is_none();
        child.kill().unwrap();
        child.wait().unwrap();

        assert!(still_running, "watch exited on its own");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("v1.4.2"));
        assert!(html.contains("volcanoyt-2.0.0.apk"));
    }
}
