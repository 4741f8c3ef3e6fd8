use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{CRITERIA_JSON, TEAMS_JSON, ZONES_JSON};

/// TestHarness provides an isolated project directory with data files and a
/// `.standings/config.md` pointing at them.
pub struct TestHarness {
    pub dir: TempDir,
    pub data_dir: PathBuf,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with the default fixtures and config.
    pub fn new() -> Self {
        let harness = Self::bare();
        harness.write_data("teams.json", TEAMS_JSON);
        harness.write_data("zones.json", ZONES_JSON);
        harness.write_data("criteri.json", CRITERIA_JSON);

        harness.write_config(
            r#"---
league:
  name: Fantalega del Bar
data:
  teams: data/teams.json
  zones: data/zones.json
  criteria: data/criteri.json
site:
  output_dir: public
---
"#,
        );
        harness
    }

    /// Creates a harness with a data directory but no config.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = dir.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let config_path = dir.path().join(".standings/config.md");

        TestHarness {
            dir,
            data_dir,
            config_path,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_standings")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_data(&self, name: &str, content: &str) {
        fs::write(self.data_dir.join(name), content).expect("Failed to write data file");
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Runs the binary in the harness directory with colors and the global
    /// config disabled.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env(
                "STANDINGS_GLOBAL_CONFIG",
                self.path().join("no-global-config.md"),
            )
            .env_remove("STANDINGS_QUIET")
            .output()
            .expect("Failed to run standings binary")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
