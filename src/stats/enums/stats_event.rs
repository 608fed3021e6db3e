//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every counter that can be incremented or set.
///
/// Used with `TrackerService::update_stats()` and `TrackerService::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Peers,
    Files,
    TimestampConsole,
    TimestampSweep,
    ConnectionsHandled,
    RequestsHandled,
    BadRequests,
    PeersRegistered,
    PeersUnregistered,
    PeersExpired,
    ApiHandled,
}
