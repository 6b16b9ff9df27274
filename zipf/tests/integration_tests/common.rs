// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GETTYSBURG: &str = "Four score and seven years ago our fathers brought forth on this \
continent, a new nation, conceived in Liberty, and dedicated to the proposition that all men \
are created equal.\n\
Now we are engaged in a great civil war, testing whether that nation, or any nation so \
conceived and so dedicated, can long endure. We are met on a great battle-field of that war.\n";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_config_file(dir: &Path, lines: &[&str]) -> Result<PathBuf> {
    create_test_file(dir, ".zipf.toml", &lines.join("\n"))
}

/// A temp dir holding `input/<name>` and an empty `out/` directory.
pub fn setup_input(name: &str, content: &str) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), &format!("input/{name}"), content)?;
    let out = temp_dir.path().join("out");
    fs::create_dir_all(&out)?;
    Ok((temp_dir, input, out))
}
