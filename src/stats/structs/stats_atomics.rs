use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub timestamp_run_sweep: AtomicI64,
    pub peers: AtomicI64,
    pub files: AtomicI64,
    pub connections_handled: AtomicI64,
    pub requests_handled: AtomicI64,
    pub bad_requests: AtomicI64,
    pub peers_registered: AtomicI64,
    pub peers_unregistered: AtomicI64,
    pub peers_expired: AtomicI64,
    pub api_handled: AtomicI64,
}
