use std::sync::Arc;
use tokio::sync::broadcast;
use crate::config::structs::configuration::Configuration;
use crate::registry::structs::registry::Registry;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_event::TrackerEvent;

#[derive(Debug)]
pub struct TrackerService {
    pub config: Arc<Configuration>,
    pub registry: Registry,
    pub stats: Arc<StatsAtomics>,
    /// Lossy fan-out; a slow subscriber misses events instead of blocking mutations.
    pub events: broadcast::Sender<TrackerEvent>,
}
