use std::fmt;
use std::fmt::Formatter;
use std::net::{IpAddr, SocketAddr};
use crate::protocol::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn new(host: IpAddr, port: u16) -> PeerAddress {
        PeerAddress(host, port)
    }

    pub fn host(&self) -> IpAddr {
        self.0
    }

    pub fn port(&self) -> u16 {
        self.1
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.0, self.1)
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(address: SocketAddr) -> Self {
        PeerAddress(address.ip(), address.port())
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}
