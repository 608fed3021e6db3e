use std::sync::Arc;
use parking_lot::RwLock;
use crate::peer::structs::local_share_set::LocalShareSet;

/// Readers clone the inner `Arc`; a rescan swaps in a new set instead of editing the old one.
pub type SharedShareSet = Arc<RwLock<Arc<LocalShareSet>>>;
