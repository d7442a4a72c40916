// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content)?;
    Ok(path)
}

pub fn read(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?)
}

/// A small Flutter project: two files needing migration, one clean file,
/// plus files the scanner must never touch.
pub fn setup_flutter_project() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(
        root,
        "lib/main.dart",
        b"final overlay = Colors.white.withOpacity(0.1);\n",
    )?;

    create_test_file(
        root,
        "lib/screens/home.dart",
        b"color: theme.colorScheme.primary.withOpacity(opacityValue),\n\
          shadow: Colors.black.withOpacity(0.25),\n",
    )?;

    create_test_file(root, "lib/utils/math.dart", b"int twice(int x) => x * 2;\n")?;

    create_test_file(root, "lib/notes.txt", b"Colors.white.withOpacity(0.1)\n")?;

    create_test_file(root, "lib/.cache/stale.dart", b"a.withOpacity(0.9)\n")?;

    create_test_file(root, "test/widget_test.dart", b"b.withOpacity(0.9)\n")?;

    Ok(temp_dir)
}
