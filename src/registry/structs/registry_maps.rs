use std::collections::{BTreeMap, BTreeSet};
use crate::registry::structs::peer_record::PeerRecord;
use crate::registry::types::ahash_map::{AHashMap, AHashSet};

#[derive(Debug, Default)]
pub struct RegistryMaps {
    pub peers: BTreeMap<String, PeerRecord>,
    /// Filename to hosting peer ids.
    pub files: BTreeMap<String, BTreeSet<String>>,
    /// Peer id to the filenames it hosts.
    pub peer_files: AHashMap<String, AHashSet<String>>,
}
