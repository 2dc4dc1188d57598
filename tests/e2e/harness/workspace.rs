use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tasks_core::Store;
use tempfile::TempDir;

/// File name of the task document inside a workspace.
pub const TASK_FILE: &str = "db.json";

/// Manages isolated test environments with tempfile
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn empty() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self { dir })
    }

    /// Create workspace whose task file already holds `content`
    pub fn with_task_file(content: &[u8]) -> Result<Self> {
        let workspace = Self::empty()?;
        workspace.write_file(TASK_FILE, content)?;
        Ok(workspace)
    }

    /// Get workspace path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Location of the task document
    pub fn task_file(&self) -> PathBuf {
        self.path().join(TASK_FILE)
    }

    /// Initialize (or reopen) the store on the workspace's task file
    pub fn open_store(&self) -> Result<Store> {
        Ok(Store::initialize(self.task_file())?)
    }

    /// Parse the task document as raw JSON
    pub fn read_document(&self) -> Result<serde_json::Value> {
        let data = self.read_file(TASK_FILE)?;
        serde_json::from_slice(&data).context("Task file is not valid JSON")
    }

    /// Write file to workspace
    pub fn write_file(&self, path: &str, content: &[u8]) -> Result<()> {
        let full_path = self.path().join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directories for {}", path))?;
        }

        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write file: {}", path))?;

        Ok(())
    }

    /// Read file from workspace
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.path().join(path);
        fs::read(&full_path).with_context(|| format!("Failed to read file: {}", path))
    }

    /// Check if file exists
    pub fn file_exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }
}
