use std::collections::BTreeMap;
use std::path::PathBuf;

/// Snapshot of the files a peer offers, filename to path on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalShareSet {
    pub files: BTreeMap<String, PathBuf>,
}
