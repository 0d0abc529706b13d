use assert_cmd::Command;
use crewdir_testing::MockDirectoryServer;
use crewdir_testing::fixtures::sample_directory;
use crewdir_types::Employee;
use std::path::PathBuf;
use tempfile::TempDir;

/// One mock server plus an isolated config dir per test.
pub struct TestFixture {
    pub server: MockDirectoryServer,
    config_dir: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self::with_employees(sample_directory())
    }

    pub fn empty() -> Self {
        Self::with_employees(Vec::new())
    }

    pub fn with_employees(seed: Vec<Employee>) -> Self {
        let server = MockDirectoryServer::start_with(seed).expect("failed to start mock server");
        let config_dir = TempDir::new().expect("failed to create config dir");
        Self { server, config_dir }
    }

    /// A crewdir command pointed at the mock server, with config isolated
    /// from the developer's machine.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_without_api_url();
        cmd.arg("--api-url").arg(self.server.base_url());
        cmd
    }

    /// Same, but without `--api-url`, for config-resolution tests.
    pub fn command_without_api_url(&self) -> Command {
        let mut cmd = Command::cargo_bin("crewdir").expect("crewdir binary");
        cmd.arg("--config-dir").arg(self.config_dir.path());
        cmd.env_remove("CREWDIR_API_URL");
        cmd.env_remove("CREWDIR_PATH");
        cmd
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }
}
