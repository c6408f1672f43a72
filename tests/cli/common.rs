use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory used as working directory and for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file with the given content in the temporary directory
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Command running inside the temporary directory, so no stray
    /// config file is picked up.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cmd();
        cmd.current_dir(self.temp_dir.path()).env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the identity-mock command
#[allow(deprecated)]
pub fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("identity-mock").expect("Failed to find identity-mock binary")
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
