use crate::tracker::enums::tracker_event::TrackerEvent;

impl TrackerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackerEvent::PeerListUpdated { .. } => "peer_list_updated",
            TrackerEvent::FileListUpdated { .. } => "file_list_updated",
        }
    }
}
