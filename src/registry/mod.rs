//! In-memory peer and file registry.
//!
//! The registry owns two maps: peer id to [`PeerRecord`](structs::peer_record::PeerRecord),
//! and filename to the set of peer ids hosting it. A reverse index from peer id to its
//! filenames keeps removal proportional to what the peer shared.
//!
//! # Consistency
//!
//! All three maps live behind one `parking_lot::RwLock`, so every operation applies
//! completely or not at all. The registry maintains these invariants:
//!
//! - every hoster of every file has a peer record
//! - no filename entry has an empty hoster set
//! - the reverse index mirrors the hoster sets exactly
//!
//! Hosters are kept in `BTreeSet`s, so search results list addresses in ascending
//! peer id order.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_share::registry::structs::registry::Registry;
//!
//! let registry = Registry::new();
//! registry.upsert_peer("a1b2c3d4", address);
//! registry.add_shares("a1b2c3d4", &[String::from("song1.mp3")]);
//! let results = registry.search("SONG");
//! ```

/// Registry data structures.
pub mod structs;

/// Registry operations.
pub mod impls;

/// Hash map aliases.
pub mod types;
