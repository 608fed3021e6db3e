pub mod stats_atomics;
pub mod tracker_service;
