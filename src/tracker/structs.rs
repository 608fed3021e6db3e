/// Request dispatch over the registry.
pub mod tracker_service;

/// Framed TCP front-end.
pub mod tracker_server;
