//! Test environment builder for isolated Breakdown testing.
//!
//! Provides `TestEnv` - a temp project holding a `$JOB` tree of published
//! versions and a `scene.toml` manifest, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::EXT;

/// Result of running a Breakdown CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated project directory, used as the working directory
/// - `$JOB` pointing at `<project>/job`
/// - Isolated config home (`BREAKDOWN_CONFIG_HOME`)
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for the user config
    pub config_home: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Directory `$JOB` expands to
    pub fn job_root(&self) -> PathBuf {
        self.project_path("job")
    }

    /// On-disk path of one published version
    pub fn version_file(&self, step: &str, asset: &str, version: u32) -> PathBuf {
        self.job_root()
            .join(step)
            .join(asset)
            .join(format!("v{:03}", version))
            .join(format!("{}.{}", asset, EXT))
    }

    /// Versions of an asset still present on disk
    pub fn versions_on_disk(&self, step: &str, asset: &str, candidates: &[u32]) -> Vec<u32> {
        candidates
            .iter()
            .copied()
            .filter(|&v| self.version_file(step, asset, v).is_file())
            .collect()
    }

    /// Read the scene manifest
    pub fn read_scene(&self) -> String {
        std::fs::read_to_string(self.project_path("scene.toml"))
            .unwrap_or_else(|e| panic!("Failed to read scene.toml: {}", e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a file to the config home
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.config_home.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run breakdown in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run breakdown with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        self.output_to_result(cmd.output().expect("Failed to execute breakdown"))
    }

    /// Run breakdown with some env vars removed
    pub fn run_without_env(&self, args: &[&str], removed: &[&str]) -> TestResult {
        let mut cmd = self.command(args);
        for key in removed {
            cmd.env_remove(key);
        }
        self.output_to_result(cmd.output().expect("Failed to execute breakdown"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_breakdown"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("JOB", self.job_root())
            .env("BREAKDOWN_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("HIP")
            .env_remove("RUST_LOG")
            .env_remove("BREAKDOWN_TEMPLATE")
            .env_remove("BREAKDOWN_SCENE");
        cmd
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    published: Vec<(String, String, Vec<u32>)>,
    references: Vec<(String, String, bool)>,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with no files and an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish versions of an asset under `$JOB/<step>/<asset>/vNNN/`
    pub fn with_versions(mut self, step: &str, asset: &str, versions: &[u32]) -> Self {
        self.published
            .push((step.to_string(), asset.to_string(), versions.to_vec()));
        self
    }

    /// Add a scene reference with a raw path
    pub fn with_reference(mut self, id: &str, raw_path: &str) -> Self {
        self.references
            .push((id.to_string(), raw_path.to_string(), false));
        self
    }

    /// Add an animated scene reference
    pub fn with_animated_reference(mut self, id: &str, raw_path: &str) -> Self {
        self.references
            .push((id.to_string(), raw_path.to_string(), true));
        self
    }

    /// Set `.breakdown/config.toml` content
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            config_home: TempDir::new().expect("Failed to create config temp dir"),
        };
        std::fs::create_dir_all(env.job_root()).expect("Failed to create job root");

        for (step, asset, versions) in &self.published {
            for &version in versions {
                let file = env.version_file(step, asset, version);
                touch(&file);
            }
        }

        let mut scene = String::new();
        for (id, path, animated) in &self.references {
            scene.push_str("[[reference]]\n");
            scene.push_str(&format!("id = {:?}\n", id));
            scene.push_str(&format!("path = {:?}\n", path));
            if *animated {
                scene.push_str("animated = true\n");
            }
            scene.push('\n');
        }
        env.write_project_file("scene.toml", &scene);

        if let Some(config) = &self.project_config {
            env.write_project_file(".breakdown/config.toml", config);
        }

        env
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create version directory");
    }
    std::fs::write(path, "geo").expect("Failed to write version file");
}
