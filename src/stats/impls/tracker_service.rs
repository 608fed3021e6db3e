use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::tracker_service::TrackerService;

impl TrackerService {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.update(event, value);
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.set(event, value);
        self.get_stats()
    }

    /// Copies the registry sizes into the peers and files gauges.
    pub fn refresh_gauges(&self)
    {
        self.stats.set(StatsEvent::Peers, self.registry.peers_count() as i64);
        self.stats.set(StatsEvent::Files, self.registry.files_count() as i64);
    }
}
