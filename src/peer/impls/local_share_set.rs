use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::debug;
use crate::common::common::is_safe_filename;
use crate::peer::structs::local_share_set::LocalShareSet;

impl LocalShareSet {
    pub fn new() -> LocalShareSet {
        LocalShareSet {
            files: BTreeMap::new(),
        }
    }

    /// Builds a share set from the regular files directly inside `directories`.
    ///
    /// Hidden files are skipped, and so are files whose extension is not in `extensions`
    /// (an empty list accepts everything). When two directories hold the same filename,
    /// the earlier directory wins. A missing directory contributes nothing.
    pub fn scan(directories: &[PathBuf], extensions: &[String]) -> std::io::Result<LocalShareSet>
    {
        let mut files = BTreeMap::new();
        for directory in directories {
            let entries = match std::fs::read_dir(directory) {
                Ok(entries) => entries,
                Err(error) if error.kind() == ErrorKind::NotFound => {
                    debug!("[PEER] Share directory {} does not exist", directory.display());
                    continue;
                }
                Err(error) => return Err(error),
            };
            for entry in entries {
                let entry = entry?;
                let Ok(filename) = entry.file_name().into_string() else {
                    continue;
                };
                if filename.starts_with('.') || !is_safe_filename(&filename) || !Self::matches_extension(&filename, extensions) {
                    continue;
                }
                let path = entry.path();
                if !std::fs::metadata(&path).map(|metadata| metadata.is_file()).unwrap_or(false) {
                    continue;
                }
                files.entry(filename).or_insert(path);
            }
        }
        Ok(LocalShareSet { files })
    }

    pub fn matches_extension(filename: &str, extensions: &[String]) -> bool
    {
        if extensions.is_empty() {
            return true;
        }
        Path::new(filename)
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_lowercase())
            .is_some_and(|extension| extensions.iter().any(|wanted| *wanted == extension))
    }

    pub fn filenames(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    pub fn get(&self, filename: &str) -> Option<&PathBuf> {
        self.files.get(filename)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
