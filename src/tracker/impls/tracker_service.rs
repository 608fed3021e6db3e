use std::net::IpAddr;
use std::sync::Arc;
use log::{debug, info};
use tokio::sync::broadcast;
use crate::common::common::{is_safe_filename, is_valid_peer_id};
use crate::config::structs::configuration::Configuration;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::tracker_response::TrackerResponse;
use crate::registry::structs::registry::Registry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_event::TrackerEvent;
use crate::tracker::structs::tracker_service::TrackerService;

pub const PEER_NOT_REGISTERED: &str = "peer not registered";

impl TrackerService {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TrackerService
    {
        let (events, _) = broadcast::channel(config.tracker.event_capacity.max(1));
        TrackerService {
            config,
            registry: Registry::new(),
            stats: Arc::new(StatsAtomics::new()),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent>
    {
        self.events.subscribe()
    }

    /// Decodes a frame payload and answers it. Undecodable payloads get an error response.
    pub fn handle_payload(&self, payload: &[u8], remote_ip: IpAddr) -> TrackerResponse
    {
        match TrackerRequest::parse(payload) {
            Ok(request) => self.handle_request(request, remote_ip),
            Err(error) => {
                self.update_stats(StatsEvent::BadRequests, 1);
                debug!("[TRACKER] Rejected request from {remote_ip}: {error}");
                TrackerResponse::error(error.to_string())
            }
        }
    }

    /// `remote_ip` is the host recorded for `register`; the port comes from the request.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_request(&self, request: TrackerRequest, remote_ip: IpAddr) -> TrackerResponse
    {
        self.update_stats(StatsEvent::RequestsHandled, 1);
        match request {
            TrackerRequest::Register { peer_id, listen_port } => self.register(&peer_id, PeerAddress::new(remote_ip, listen_port)),
            TrackerRequest::Share { peer_id, filenames, replace } => self.share(&peer_id, &filenames, replace),
            TrackerRequest::Search { keyword } => self.search(&keyword),
            TrackerRequest::ListPeers => self.list_peers(),
            TrackerRequest::ListFiles => self.list_files(),
            TrackerRequest::Heartbeat { peer_id } => self.heartbeat(&peer_id),
            TrackerRequest::Unregister { peer_id } => self.unregister(&peer_id),
        }
    }

    pub fn register(&self, peer_id: &str, address: PeerAddress) -> TrackerResponse
    {
        if !is_valid_peer_id(peer_id) {
            return TrackerResponse::error(format!("invalid peer id: {peer_id:?}"));
        }
        if address.port() == 0 {
            return TrackerResponse::error("invalid listen port: 0");
        }

        match self.registry.upsert_peer(peer_id, address) {
            None => {
                info!("[TRACKER] Peer {peer_id} registered at {address}");
                self.update_stats(StatsEvent::PeersRegistered, 1);
                self.notify_peers();
            }
            Some(previous) if previous != address => {
                info!("[TRACKER] Peer {peer_id} moved from {previous} to {address}");
                self.notify_peers();
            }
            Some(_) => {
                debug!("[TRACKER] Peer {peer_id} re-registered at {address}");
            }
        }
        self.refresh_gauges();
        TrackerResponse::success(format!("Peer {peer_id} registered"))
    }

    /// Adds (or with `replace`, sets) the filenames a peer hosts.
    ///
    /// Names that are not a single path component are ignored.
    pub fn share(&self, peer_id: &str, filenames: &[String], replace: bool) -> TrackerResponse
    {
        let (accepted, ignored): (Vec<String>, Vec<String>) = filenames.iter()
            .cloned()
            .partition(|filename| is_safe_filename(filename));

        let changed = if replace {
            self.registry.replace_shares(peer_id, &accepted).map(|(added, withdrawn)| added + withdrawn > 0)
        } else {
            self.registry.add_shares(peer_id, &accepted).map(|added| added > 0)
        };

        match changed {
            None => TrackerResponse::error(PEER_NOT_REGISTERED),
            Some(changed) => {
                if changed {
                    debug!("[TRACKER] Peer {peer_id} now shares {} files", self.registry.shares_of(peer_id).len());
                    self.notify_files();
                }
                self.refresh_gauges();
                if ignored.is_empty() {
                    TrackerResponse::success(format!("Shared {} files", accepted.len()))
                } else {
                    TrackerResponse::success(format!("Shared {} files, ignored {} invalid filenames", accepted.len(), ignored.len()))
                }
            }
        }
    }

    pub fn search(&self, keyword: &str) -> TrackerResponse
    {
        TrackerResponse::with_results(self.registry.search(keyword))
    }

    pub fn list_peers(&self) -> TrackerResponse
    {
        TrackerResponse::with_peers(self.registry.snapshot_peers())
    }

    pub fn list_files(&self) -> TrackerResponse
    {
        TrackerResponse::with_files(self.registry.list_files())
    }

    /// Refreshes liveness. An error tells an expired peer to register again.
    pub fn heartbeat(&self, peer_id: &str) -> TrackerResponse
    {
        if self.registry.touch_peer(peer_id) {
            TrackerResponse::success("heartbeat received")
        } else {
            TrackerResponse::error(PEER_NOT_REGISTERED)
        }
    }

    /// Removes a peer and everything it hosted. Unregistering an unknown peer succeeds.
    pub fn unregister(&self, peer_id: &str) -> TrackerResponse
    {
        let had_files = !self.registry.shares_of(peer_id).is_empty();
        match self.registry.remove_peer(peer_id) {
            None => TrackerResponse::success(PEER_NOT_REGISTERED),
            Some(record) => {
                info!("[TRACKER] Peer {peer_id} at {} unregistered", record.address);
                self.update_stats(StatsEvent::PeersUnregistered, 1);
                self.notify_peers();
                if had_files {
                    self.notify_files();
                }
                self.refresh_gauges();
                TrackerResponse::success(format!("Peer {peer_id} unregistered"))
            }
        }
    }

    /// Expires every peer idle for longer than the staleness window.
    pub fn sweep(&self, window: std::time::Duration) -> Vec<String>
    {
        let files_before = self.registry.files_count();
        let expired = self.registry.remove_stale(window);
        self.set_stats(StatsEvent::TimestampSweep, chrono::Utc::now().timestamp());
        if !expired.is_empty() {
            info!("[SWEEP] Expired {} peers: {}", expired.len(), expired.join(", "));
            self.update_stats(StatsEvent::PeersExpired, expired.len() as i64);
            self.notify_peers();
            if self.registry.files_count() != files_before {
                self.notify_files();
            }
            self.refresh_gauges();
        }
        expired
    }

    pub fn notify_peers(&self)
    {
        if self.events.receiver_count() == 0 {
            return;
        }
        let _ = self.events.send(TrackerEvent::PeerListUpdated { peers: self.registry.snapshot_peers() });
    }

    pub fn notify_files(&self)
    {
        if self.events.receiver_count() == 0 {
            return;
        }
        let _ = self.events.send(TrackerEvent::FileListUpdated { files: self.registry.list_files() });
    }
}
