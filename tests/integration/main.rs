//! Integration tests for gitvars

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command with an isolated, nonexistent config file
fn gitvars(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("gitvars");
    cmd.env("GITVARS_CONFIG", home.path().join("config.toml"))
        .env_remove("CI");
    cmd
}

const SERVICE: &str = r#"service: orders
provider:
  name: aws
functions:
  create:
    handler: src/create.handler
    environment:
      GIT_BRANCH: manual-value
  list:
    handler: src/list.handler
    events:
      - sqs:
          arn: !GetAtt Queue.Arn
resources:
  Outputs:
    QueueUrl:
      Value: !Ref Queue
"#;

mod cli_tests {
    use super::*;

    #[test]
    fn help_displays() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Resolve git repository metadata into serverless function environment variables and tags",
            ))
            .stdout(predicate::str::contains("export"));
    }

    #[test]
    fn version_displays() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("gitvars"));
    }

    #[test]
    fn config_path() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[git]"))
            .stdout(predicate::str::contains("timeout_ms = 1000"));
    }

    #[test]
    fn config_set_then_show() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["config", "set", "git.timeout_ms", "2500"])
            .assert()
            .success();
        gitvars(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("timeout_ms = 2500"));
    }

    #[test]
    fn unknown_variable_lists_candidates() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["get", "nope"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Git variable nope is unknown"))
            .stderr(predicate::str::contains("'describeLight'"))
            .stderr(predicate::str::contains("'isDirty'"));
    }

    #[test]
    fn unknown_source_fails() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["get", "ssm:/app/key"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No variable source handles"));
    }

    #[test]
    fn env_reference_passes_through() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .env("GITVARS_IT_STAGE", "staging")
            .args(["get", "env:GITVARS_IT_STAGE"])
            .assert()
            .success()
            .stdout("staging\n");
    }

    #[test]
    fn query_outside_repository_fails() {
        let home = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        gitvars(&home)
            .arg("-C")
            .arg(outside.path())
            .args(["get", "sha1"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Git query failed"));
    }

    #[test]
    fn disabled_export_needs_no_repository() {
        let home = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let doc = format!("custom:\n  exportGitVariables: false\n{}", SERVICE);
        std::fs::write(outside.path().join("serverless.yml"), &doc).unwrap();

        gitvars(&home)
            .arg("-C")
            .arg(outside.path())
            .arg("export")
            .assert()
            .success()
            .stdout(predicate::str::contains("disabled"));

        let after = std::fs::read_to_string(outside.path().join("serverless.yml")).unwrap();
        assert_eq!(after, doc);
    }

    #[test]
    fn hook_for_unregistered_phase_is_noop() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["hook", "deploy:deploy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing registered"));
    }

    #[test]
    fn completions_generate() {
        let home = TempDir::new().unwrap();
        gitvars(&home)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gitvars"));
    }
}

mod repository_tests {
    use super::*;
    use gitvars::service::ServiceDocument;
    use serde_yaml::Value;
    use std::process::Command as StdCommand;

    fn git(dir: &Path, args: &[&str]) -> bool {
        StdCommand::new("git")
            .args([
                "-c",
                "user.name=gitvars",
                "-c",
                "user.email=gitvars@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Temporary repository with one commit on `main`, or None without git
    fn repository() -> Option<TempDir> {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "hello\n").unwrap();

        let ok = git(dir.path(), &["init", "-q"])
            && git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"])
            && git(dir.path(), &["add", "README.md"])
            && git(dir.path(), &["commit", "-q", "-m", "initial commit"]);

        ok.then_some(dir)
    }

    fn dir_name(dir: &TempDir) -> String {
        dir.path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn get_resolves_from_repository() {
        let Some(repo) = repository() else {
            eprintln!("git unavailable, skipping");
            return;
        };
        let home = TempDir::new().unwrap();

        gitvars(&home)
            .arg("-C")
            .arg(repo.path())
            .args(["get", "branch", "isDirty", "message", "repository"])
            .assert()
            .success()
            .stdout(format!("main\nfalse\ninitial commit\n{}\n", dir_name(&repo)));
    }

    #[test]
    fn dirty_tree_is_reported() {
        let Some(repo) = repository() else {
            eprintln!("git unavailable, skipping");
            return;
        };
        std::fs::write(repo.path().join("README.md"), "changed\n").unwrap();
        let home = TempDir::new().unwrap();

        gitvars(&home)
            .arg("-C")
            .arg(repo.path())
            .args(["get", "git:isDirty"])
            .assert()
            .success()
            .stdout("true\n");
    }

    #[test]
    fn list_json_has_every_variable() {
        let Some(repo) = repository() else {
            eprintln!("git unavailable, skipping");
            return;
        };
        let home = TempDir::new().unwrap();

        let output = gitvars(&home)
            .arg("-C")
            .arg(repo.path())
            .args(["list", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        for name in gitvars::VariableName::ALL {
            assert!(json.get(name.as_str()).is_some(), "missing {}", name);
        }
        assert_eq!(json["isDirty"], serde_json::Value::Bool(false));
        assert_eq!(json["commit"].as_str().unwrap().len(), 40);
    }

    #[test]
    fn export_writes_environment_and_tags() {
        let Some(repo) = repository() else {
            eprintln!("git unavailable, skipping");
            return;
        };
        let path = repo.path().join("serverless.yml");
        std::fs::write(&path, SERVICE).unwrap();
        let home = TempDir::new().unwrap();

        gitvars(&home)
            .arg("-C")
            .arg(repo.path())
            .arg("export")
            .assert()
            .success();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("arn: !GetAtt Queue.Arn"));
        assert!(written.contains("Value: !Ref Queue"));

        let doc = ServiceDocument::from_yaml_str(&written).unwrap();
        let repo_name = Value::String(dir_name(&repo));

        let create = doc.function("create").unwrap();
        let env = &create["environment"];
        assert_eq!(env["GIT_BRANCH"], Value::String("manual-value".to_string()));
        assert_eq!(env["GIT_REPOSITORY"], repo_name);
        // The untracked service file does not show up in `git diff --stat`
        assert_eq!(env["GIT_IS_DIRTY"], Value::String("false".to_string()));

        let tags = &create["tags"];
        assert_eq!(tags["GIT_BRANCH"], Value::String("main".to_string()));

        let list = doc.function("list").unwrap();
        let env = &list["environment"];
        assert_eq!(env["GIT_COMMIT_LONG"].as_str().unwrap().len(), 40);
        assert_eq!(env["GIT_REPOSITORY"], repo_name);
    }

    #[test]
    fn hook_dry_run_prints_document() {
        let Some(repo) = repository() else {
            eprintln!("git unavailable, skipping");
            return;
        };
        let path = repo.path().join("serverless.yml");
        std::fs::write(&path, SERVICE).unwrap();
        let home = TempDir::new().unwrap();

        gitvars(&home)
            .arg("-C")
            .arg(repo.path())
            .args(["hook", "after:package:initialize", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("GIT_COMMIT_SHORT"));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), SERVICE);
    }
}
