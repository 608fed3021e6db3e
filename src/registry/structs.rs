/// The synchronised registry.
pub mod registry;

/// The maps guarded by the registry lock.
pub mod registry_maps;

/// A registered peer.
pub mod peer_record;
