//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};

/// Write a small phrase dataset into the given directory
pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("hello.json");
    fs::write(
        &path,
        r#"[
            {"Language": "Afrikaans", "HelloPhrase": "Hallo"},
            {"Language": "English", "HelloPhrase": "Hello"},
            {"Language": "French", "HelloPhrase": "Bonjour"}
        ]"#,
    )
    .unwrap();
    path
}
