use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            timestamp_run_console: AtomicI64::new(0),
            timestamp_run_sweep: AtomicI64::new(0),
            peers: AtomicI64::new(0),
            files: AtomicI64::new(0),
            connections_handled: AtomicI64::new(0),
            requests_handled: AtomicI64::new(0),
            bad_requests: AtomicI64::new(0),
            peers_registered: AtomicI64::new(0),
            peers_unregistered: AtomicI64::new(0),
            peers_expired: AtomicI64::new(0),
            api_handled: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Peers => &self.peers,
            StatsEvent::Files => &self.files,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::TimestampSweep => &self.timestamp_run_sweep,
            StatsEvent::ConnectionsHandled => &self.connections_handled,
            StatsEvent::RequestsHandled => &self.requests_handled,
            StatsEvent::BadRequests => &self.bad_requests,
            StatsEvent::PeersRegistered => &self.peers_registered,
            StatsEvent::PeersUnregistered => &self.peers_unregistered,
            StatsEvent::PeersExpired => &self.peers_expired,
            StatsEvent::ApiHandled => &self.api_handled,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set(&self, event: StatsEvent, value: i64) {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            timestamp_run_sweep: self.timestamp_run_sweep.load(Ordering::SeqCst),
            peers: self.peers.load(Ordering::SeqCst),
            files: self.files.load(Ordering::SeqCst),
            connections_handled: self.connections_handled.load(Ordering::SeqCst),
            requests_handled: self.requests_handled.load(Ordering::SeqCst),
            bad_requests: self.bad_requests.load(Ordering::SeqCst),
            peers_registered: self.peers_registered.load(Ordering::SeqCst),
            peers_unregistered: self.peers_unregistered.load(Ordering::SeqCst),
            peers_expired: self.peers_expired.load(Ordering::SeqCst),
            api_handled: self.api_handled.load(Ordering::SeqCst),
        }
    }
}
