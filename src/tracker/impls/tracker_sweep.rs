use std::sync::Arc;
use log::info;
use tokio::sync::watch;
use crate::common::common::shutdown_waiting;
use crate::tracker::structs::tracker_service::TrackerService;

impl TrackerService {
    /// Runs the liveness sweep every `peers_cleanup_interval` until shutdown.
    pub async fn sweep_loop(self: Arc<Self>, mut rx: watch::Receiver<bool>)
    {
        let interval = self.config.tracker.cleanup_interval();
        let window = self.config.tracker.staleness_window();
        info!("[SWEEP] Expiring peers idle for more than {}s, checking every {}s", window.as_secs(), interval.as_secs());
        loop {
            if shutdown_waiting(interval, &mut rx).await {
                info!("[SWEEP] Stopping liveness sweep...");
                break;
            }
            self.sweep(window);
        }
    }
}
