use crate::error::{GitgraphError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Newline-delimited list of repository paths, kept deduplicated and in
/// first-seen order across runs. The core only ever reads it.
pub struct PathStore {
    file: PathBuf,
}

impl PathStore {
    pub const DEFAULT_FILE_NAME: &'static str = ".gitgraph";

    /// Store backed by `file`, or by `~/.gitgraph` when `None`.
    pub fn resolve(file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(f) => f.to_path_buf(),
            None => dirs::home_dir()
                .ok_or_else(|| {
                    GitgraphError::Other("Cannot determine home directory".to_string())
                })?
                .join(Self::DEFAULT_FILE_NAME),
        };
        Ok(Self { file })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.file.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.file)?;
        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Merge `paths` into the stored list, keeping existing order and
    /// dropping duplicates. Returns how many entries were new.
    pub fn add(&self, paths: &[PathBuf]) -> Result<usize> {
        let mut merged = self.list()?;
        let mut added = 0;
        for path in paths {
            if !merged.contains(path) {
                merged.push(path.clone());
                added += 1;
            }
        }

        let mut out = String::new();
        for path in &merged {
            out.push_str(&path.to_string_lossy());
            out.push('\n');
        }
        fs::write(&self.file, out)?;
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &Path) -> PathStore {
        let file = dir.join("repos");
        PathStore::resolve(Some(file.as_path())).unwrap()
    }

    #[test]
    fn missing_file_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(dir.path()).list().unwrap(), Vec::<PathBuf>::new());
    }

    #[test]
    fn add_merges_and_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let first = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        assert_eq!(store.add(&first).unwrap(), 2);

        let second = vec![PathBuf::from("/b"), PathBuf::from("/c")];
        assert_eq!(store.add(&second).unwrap(), 1);

        assert_eq!(
            store.list().unwrap(),
            vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
    }
}
