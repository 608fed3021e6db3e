use std::net::IpAddr;
use serde::{Deserialize, Serialize};

/// Address of a peer's transfer server, encoded on the wire as `[host, port]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerAddress(pub IpAddr, pub u16);
