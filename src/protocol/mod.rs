//! Message protocol shared by tracker and transfer connections.
//!
//! Every control message is a frame: a 4-byte big-endian length followed by a UTF-8
//! JSON payload of exactly that many bytes. A receiver therefore always reads one whole
//! logical message, however large, without relying on the sender closing the stream.
//!
//! # Tracker messages
//!
//! Requests are JSON objects tagged by `"command"`:
//!
//! ```text
//! {"command":"register","peer_id":"a1b2c3d4","listen_port":5001}
//! {"command":"share","peer_id":"a1b2c3d4","filenames":["song1.mp3"]}
//! {"command":"search","keyword":"son"}
//! {"command":"list_peers"}
//! ```
//!
//! Responses carry a `status` of `success` or `error` plus optional `message`,
//! `results`, `peers` and `files` fields. Addresses are `[host, port]` arrays.
//!
//! # Transfer messages
//!
//! ```text
//! -> {"command":"download","filename":"song1.mp3"}
//! <- {"status":"found","size":1048576}     or {"status":"not_found"}
//! -> {"command":"ready"}
//! <- 1048576 raw bytes, then close
//! ```

/// Frame reader and writer.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Protocol error type.
pub mod errors;

/// Request, reply and status enumerations.
pub mod enums;

/// Address and response structures.
pub mod structs;

/// Constructors and helpers for the protocol types.
pub mod impls;

/// Unit tests for framing and message decoding.
pub mod tests;
