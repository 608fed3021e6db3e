//! Tracker statistics.
//!
//! Atomic counters updated by the socket server, the HTTP adapter and the liveness
//! sweep. Gauges (peers, files) are set after every registry mutation; everything else
//! only counts up.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_share::stats::enums::stats_event::StatsEvent;
//!
//! service.update_stats(StatsEvent::RequestsHandled, 1);
//! let stats = service.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
