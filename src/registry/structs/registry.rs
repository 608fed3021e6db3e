use parking_lot::RwLock;
use crate::registry::structs::registry_maps::RegistryMaps;

/// Peer map and file index behind a single lock.
///
/// Only the operations in `impls/registry.rs` touch the maps; nothing hands out a
/// guard or a reference into them.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) maps: RwLock<RegistryMaps>,
}
