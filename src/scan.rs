use crate::cli::CommonArgs;
use crate::store::PathStore;
use anyhow::Context;
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SKIPPED_DIRS: [&str; 2] = ["node_modules", "vendor"];

/// Recursively collect every directory under `root` that contains a `.git`
/// directory. Dependency folders are not descended into.
pub fn find_repositories(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            name != ".git" && !SKIPPED_DIRS.contains(&name.as_ref())
        })
        .build();

    for entry in walker.flatten() {
        let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
        if is_dir && entry.path().join(".git").is_dir() {
            found.push(entry.path().to_path_buf());
        }
    }
    found
}

pub fn exec(common: CommonArgs, folder: PathBuf) -> anyhow::Result<()> {
    let store =
        PathStore::resolve(common.store.as_deref()).context("Failed to locate repository list")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message("Scanning for repositories...");

    let found = find_repositories(&folder);
    pb.finish_and_clear();

    let added = store
        .add(&found)
        .context("Failed to update repository list")?;
    println!(
        "Found {} repositories, {} new (list: {})",
        found.len(),
        added,
        store.file().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_nested_repositories_and_skips_dependency_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("one/.git")).unwrap();
        fs::create_dir_all(root.join("group/two/.git")).unwrap();
        fs::create_dir_all(root.join("node_modules/dep/.git")).unwrap();
        fs::create_dir_all(root.join("plain")).unwrap();

        let mut found = find_repositories(root);
        found.sort();

        assert_eq!(found, vec![root.join("group/two"), root.join("one")]);
    }
}
