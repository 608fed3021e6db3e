pub mod tracker_event;
pub mod tracker_service;
pub mod tracker_server;
pub mod tracker_sweep;
