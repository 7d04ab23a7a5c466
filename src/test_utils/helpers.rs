use std::{env, fs, path::PathBuf};

/// Path for `name` inside a scratch directory under the system temp dir
///
/// # Panics
///
/// Panics if the scratch directory cannot be created.
#[allow(clippy::expect_used)]
pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("tagtree_tests");
    fs::create_dir_all(&dir).expect("Failed to create test scratch directory");
    dir.push(name);
    dir
}

/// Number of leading spaces on a rendered line
pub fn indentation_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
