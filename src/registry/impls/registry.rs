use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_record::PeerRecord;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::registry_maps::RegistryMaps;
use crate::registry::types::ahash_map::AHashSet;

impl Registry {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> Registry {
        Registry {
            maps: RwLock::new(RegistryMaps::default()),
        }
    }

    /// Inserts or overwrites a peer, returning its previous address if it was already known.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn upsert_peer(&self, peer_id: &str, address: PeerAddress) -> Option<PeerAddress>
    {
        let now = Instant::now();
        let mut maps = self.maps.write();
        match maps.peers.entry(peer_id.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(PeerRecord::new(peer_id, address, now));
                None
            }
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                let previous = record.address;
                record.address = address;
                record.updated = now;
                Some(previous)
            }
        }
    }

    /// Refreshes a peer's liveness timestamp. Returns false for unknown peers.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn touch_peer(&self, peer_id: &str) -> bool
    {
        let mut maps = self.maps.write();
        match maps.peers.get_mut(peer_id) {
            None => false,
            Some(record) => {
                record.updated = Instant::now();
                true
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_peer(&self, peer_id: &str) -> Option<PeerRecord>
    {
        let mut maps = self.maps.write();
        Self::remove_peer_locked(&mut maps, peer_id)
    }

    fn remove_peer_locked(maps: &mut RegistryMaps, peer_id: &str) -> Option<PeerRecord>
    {
        let record = maps.peers.remove(peer_id)?;
        if let Some(shared) = maps.peer_files.remove(peer_id) {
            for filename in shared {
                Self::withdraw_hoster(maps, filename, peer_id);
            }
        }
        Some(record)
    }

    fn withdraw_hoster(maps: &mut RegistryMaps, filename: String, peer_id: &str)
    {
        if let Entry::Occupied(mut entry) = maps.files.entry(filename) {
            entry.get_mut().remove(peer_id);
            if entry.get().is_empty() {
                entry.remove();
            }
        }
    }

    /// Adds `peer_id` as a hoster of every filename.
    ///
    /// Returns how many filenames were new for that peer, or `None` when the peer is not
    /// registered, in which case nothing changes.
    #[tracing::instrument(level = "debug", skip(self, filenames))]
    pub fn add_shares(&self, peer_id: &str, filenames: &[String]) -> Option<usize>
    {
        let mut guard = self.maps.write();
        let maps = &mut *guard;
        let record = maps.peers.get_mut(peer_id)?;
        record.updated = Instant::now();

        let owned = maps.peer_files.entry(peer_id.to_string()).or_default();
        let mut added = 0;
        for filename in filenames {
            if owned.insert(filename.clone()) {
                added += 1;
            }
            maps.files.entry(filename.clone()).or_default().insert(peer_id.to_string());
        }
        if owned.is_empty() {
            maps.peer_files.remove(peer_id);
        }
        Some(added)
    }

    /// Sets the peer's hosted filenames to exactly `filenames`.
    ///
    /// Returns `(added, withdrawn)`, or `None` when the peer is not registered.
    #[tracing::instrument(level = "debug", skip(self, filenames))]
    pub fn replace_shares(&self, peer_id: &str, filenames: &[String]) -> Option<(usize, usize)>
    {
        let mut guard = self.maps.write();
        let maps = &mut *guard;
        let record = maps.peers.get_mut(peer_id)?;
        record.updated = Instant::now();

        let wanted: AHashSet<String> = filenames.iter().cloned().collect();
        let previous = maps.peer_files.remove(peer_id).unwrap_or_default();

        let mut withdrawn = 0;
        for filename in previous.iter().filter(|filename| !wanted.contains(*filename)) {
            Self::withdraw_hoster(maps, filename.clone(), peer_id);
            withdrawn += 1;
        }

        let mut added = 0;
        for filename in wanted.iter() {
            if !previous.contains(filename) {
                added += 1;
            }
            maps.files.entry(filename.clone()).or_default().insert(peer_id.to_string());
        }

        if !wanted.is_empty() {
            maps.peer_files.insert(peer_id.to_string(), wanted);
        }
        Some((added, withdrawn))
    }

    /// Case-insensitive substring search over filenames.
    ///
    /// Each hit maps to its hosters' addresses in ascending peer id order. Hosters without
    /// a peer record are skipped and a filename left with no address is omitted.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn search(&self, keyword: &str) -> BTreeMap<String, Vec<PeerAddress>>
    {
        let needle = keyword.to_lowercase();
        let maps = self.maps.read();
        let mut results = BTreeMap::new();
        for (filename, hosters) in maps.files.iter() {
            if !filename.to_lowercase().contains(&needle) {
                continue;
            }
            let addresses: Vec<PeerAddress> = hosters.iter()
                .filter_map(|peer_id| maps.peers.get(peer_id).map(|record| record.address))
                .collect();
            if !addresses.is_empty() {
                results.insert(filename.clone(), addresses);
            }
        }
        results
    }

    /// Point-in-time copy of every peer, ordered by peer id.
    pub fn snapshot_peers(&self) -> Vec<(String, PeerAddress)>
    {
        let maps = self.maps.read();
        maps.peers.iter().map(|(peer_id, record)| (peer_id.clone(), record.address)).collect()
    }

    pub fn list_files(&self) -> Vec<String>
    {
        let maps = self.maps.read();
        maps.files.keys().cloned().collect()
    }

    pub fn hosters(&self, filename: &str) -> Vec<String>
    {
        let maps = self.maps.read();
        maps.files.get(filename).map(|hosters| hosters.iter().cloned().collect()).unwrap_or_default()
    }

    pub fn shares_of(&self, peer_id: &str) -> Vec<String>
    {
        let maps = self.maps.read();
        let mut filenames: Vec<String> = maps.peer_files.get(peer_id)
            .map(|filenames| filenames.iter().cloned().collect())
            .unwrap_or_default();
        filenames.sort();
        filenames
    }

    pub fn get_peer(&self, peer_id: &str) -> Option<PeerRecord>
    {
        let maps = self.maps.read();
        maps.peers.get(peer_id).cloned()
    }

    pub fn contains_peer(&self, peer_id: &str) -> bool
    {
        let maps = self.maps.read();
        maps.peers.contains_key(peer_id)
    }

    pub fn peers_count(&self) -> usize
    {
        let maps = self.maps.read();
        maps.peers.len()
    }

    pub fn files_count(&self) -> usize
    {
        let maps = self.maps.read();
        maps.files.len()
    }

    /// Removes every peer idle for longer than `window` and returns their ids.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_stale(&self, window: Duration) -> Vec<String>
    {
        let now = Instant::now();
        let mut maps = self.maps.write();
        let stale: Vec<String> = maps.peers.values()
            .filter(|record| record.idle_for(now) > window)
            .map(|record| record.peer_id.clone())
            .collect();
        for peer_id in stale.iter() {
            Self::remove_peer_locked(&mut maps, peer_id);
        }
        stale
    }

    /// Checks the hoster invariants.
    pub fn is_consistent(&self) -> bool
    {
        let maps = self.maps.read();
        let hosters_registered = maps.files.values().all(|hosters| {
            !hosters.is_empty() && hosters.iter().all(|peer_id| maps.peers.contains_key(peer_id))
        });
        let index_mirrors = maps.peer_files.iter().all(|(peer_id, filenames)| {
            filenames.iter().all(|filename| maps.files.get(filename).is_some_and(|hosters| hosters.contains(peer_id)))
        });
        let index_complete = maps.files.iter().all(|(filename, hosters)| {
            hosters.iter().all(|peer_id| maps.peer_files.get(peer_id).is_some_and(|filenames| filenames.contains(filename)))
        });
        hosters_registered && index_mirrors && index_complete
    }
}
