//! End-to-end tests for the `manz-render` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn manz_render(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("manz-render");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        manz_render(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--external-styles"))
            .stdout(predicate::str::contains("--dump-content"));
    }

    #[test]
    fn dump_content_prints_three_articles() {
        let dir = TempDir::new().unwrap();
        let output = manz_render(&dir).arg("--dump-content").output().unwrap();
        assert!(output.status.success());

        let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["author"], "KIMEKO MCCOY");
        assert_eq!(items[2]["title"], "Is Meta's Vibes the future of TikTok?");
        assert!(!dir.path().join("dist").exists());
    }
}

mod export {
    use super::*;

    #[test]
    fn default_run_writes_dist_index() {
        let dir = TempDir::new().unwrap();
        manz_render(&dir).assert().success();

        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn output_title_and_external_styles_flags() {
        let dir = TempDir::new().unwrap();
        manz_render(&dir)
            .args(["-o", "public/home.html", "--title", "Staging", "--external-styles"])
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("public/home.html")).unwrap();
        assert!(html.contains("<title>Staging</title>"));
        assert!(html.contains(r#"href="styles.css""#));
        assert!(dir.path().join("public/styles.css").exists());
    }

    #[test]
    fn discovered_config_is_applied() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("manz.toml"),
            "[export]\noutput = \"site/index.html\"\ntitle = \"From Config\"\n",
        )
        .unwrap();

        manz_render(&dir).assert().success();

        let html = std::fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(html.contains("<title>From Config</title>"));
    }

    #[test]
    fn malformed_discovered_config_warns_and_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("manz.toml"), "[export\n").unwrap();

        manz_render(&dir)
            .assert()
            .success()
            .stderr(predicate::str::contains("falling back to defaults"));
        assert!(dir.path().join("dist/index.html").exists());
    }

    #[test]
    fn malformed_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.toml"), "[export]\noutput = 5\n").unwrap();

        manz_render(&dir)
            .args(["--config", "bad.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("loading config bad.toml"));
        assert!(!dir.path().join("dist").exists());
    }
}
