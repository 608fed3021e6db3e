//! Peer side of the network.
//!
//! A [`PeerSession`](structs::peer_session::PeerSession) owns everything one peer
//! process needs:
//!
//! - a stable peer id (configured, or 8 random hex characters)
//! - the [`LocalShareSet`](structs::local_share_set::LocalShareSet) scanned from the share and
//!   download directories, replaced wholesale on every rescan
//! - a [`TrackerClient`](structs::tracker_client::TrackerClient) that reuses one framed
//!   connection to the tracker
//! - a running transfer server and a transfer client
//! - the result of the last search
//!
//! # Lifecycle
//!
//! ```text
//! start -> bind transfer server -> register -> advertise
//!       -> heartbeat / rescan loops, search, download (-> advertise)
//!       -> shutdown (best-effort unregister)
//! ```

/// Peer session error type.
pub mod errors;

/// Share set, tracker client and session structures.
pub mod structs;

/// Implementation blocks for the peer structures.
pub mod impls;

/// Shared handle aliases.
pub mod types;
