//! Declarative environment for CLI runs.

use crate::fixtures::to_feed_json;
use anyhow::Result;
use assert_cmd::Command;
use eoldate_types::ReleaseCycle;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a product document and return its path.
    pub fn write_feed(&self, name: &str, cycles: &[ReleaseCycle]) -> Result<PathBuf> {
        self.write_raw_feed(name, &to_feed_json(cycles))
    }

    pub fn write_raw_feed(&self, name: &str, json: &str) -> Result<PathBuf> {
        let path = self.root().join(format!("{}.json", name));
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn write_config(&self, toml: &str) -> Result<()> {
        fs::write(&self.config_path, toml)?;
        Ok(())
    }

    /// Point `cmd` at the world's config and strip ambient color/log settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("EOLDATE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("EOLDATE_API_URL")
    }
}
