use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use log::info;

use super::{ACN_SDT_MULTICAST_PORT, SourceError};

/// Multicast group carrying a universe: 239.255.HI.LO, where HI/LO are the
/// universe number's big-endian bytes (E1.31 universe-to-group mapping).
pub fn universe_multicast_addr(universe: u16) -> Ipv4Addr {
    let [hi, lo] = universe.to_be_bytes();
    Ipv4Addr::new(239, 255, hi, lo)
}

/// Receiving end of one universe's multicast group.
pub struct SacnSocket {
    socket: UdpSocket,
}

impl SacnSocket {
    /// Bind the ACN port and join the universe's group on `iface`
    /// (`INADDR_ANY` when absent, letting the OS pick the interface).
    pub fn bind(universe: u16, iface: Option<Ipv4Addr>) -> Result<Self, SourceError> {
        let group = universe_multicast_addr(universe);
        let socket = UdpSocket::bind(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            ACN_SDT_MULTICAST_PORT,
        ))?;
        socket.join_multicast_v4(&group, &iface.unwrap_or(Ipv4Addr::UNSPECIFIED))?;
        info!("listening on {}:{}", group, ACN_SDT_MULTICAST_PORT);
        Ok(Self { socket })
    }

    /// Receive one datagram into `buf`, returning the payload length.
    pub fn recv(&self, buf: &mut [u8]) -> Result<usize, SourceError> {
        Ok(self.socket.recv(buf)?)
    }
}
