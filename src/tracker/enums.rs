/// Notifications fanned out after registry changes.
pub mod tracker_event;
