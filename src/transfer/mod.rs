//! Direct peer-to-peer file transfer.
//!
//! Every peer runs a [`TransferServer`](structs::transfer_server::TransferServer) over
//! its local share set and uses a [`TransferClient`](structs::transfer_client::TransferClient)
//! to pull files from other peers. One transfer per connection:
//!
//! 1. the client sends `download(filename)`
//! 2. the server answers `found(size)` or `not_found`
//! 3. after `found`, the client acknowledges with `ready`
//! 4. the server streams exactly `size` raw bytes and closes
//!
//! The client counts received bytes in a [`TransferSession`](structs::transfer_session::TransferSession)
//! and only treats the download as complete when the count reaches the announced size.
//! Data goes to a hidden `.part` file, unique per download, that is renamed on
//! completion and removed on any failure.

/// Transfer error type.
pub mod errors;

/// Transfer server, client and session structures.
pub mod structs;

/// Implementation blocks for the transfer types.
pub mod impls;
