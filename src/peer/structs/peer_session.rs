use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use tokio::sync::{watch, Mutex};
use crate::config::structs::peer_config::PeerConfig;
use crate::peer::structs::tracker_client::TrackerClient;
use crate::peer::types::shared_share_set::SharedShareSet;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::transfer::structs::transfer_client::TransferClient;

#[derive(Debug)]
pub struct PeerSession {
    pub peer_id: String,
    pub config: Arc<PeerConfig>,
    pub tracker: TrackerClient,
    pub transfer: TransferClient,
    pub shares: SharedShareSet,
    /// Held across scan, swap and advertise so a newer share set is never overwritten by an older one.
    pub share_sync: Mutex<()>,
    /// Set when the last advertise failed, so the next rescan sends the set even if unchanged.
    pub advertise_pending: AtomicBool,
    pub last_search: RwLock<BTreeMap<String, Vec<PeerAddress>>>,
    /// Where the transfer server actually listens.
    pub listen_addr: SocketAddr,
    pub shutdown_sender: watch::Sender<bool>,
}
