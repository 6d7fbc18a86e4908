//! Isolated filesystem environment for runtime and CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory with an input file slot and an output directory.
pub struct TestWorld {
    temp_dir: TempDir,
    output_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().join("out");
        fs::create_dir_all(&output_dir).expect("Failed to create output dir");
        Self {
            temp_dir,
            output_dir,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `contents` to `name` under the temp root and return its path.
    pub fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write input file");
        path
    }

    /// File names in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.output_dir)
            .expect("Failed to read output dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir.join(name)).expect("Failed to read output file")
    }
}
