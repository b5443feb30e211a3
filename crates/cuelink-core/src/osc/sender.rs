use std::net::{SocketAddr, UdpSocket};

use super::message::encode_message;
use super::OscError;

/// UDP transport for outbound OSC commands. The socket is connected once
/// at startup; each command is one datagram.
pub struct OscSender {
    socket: UdpSocket,
}

impl OscSender {
    pub fn connect(target: SocketAddr) -> Result<Self, OscError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(target)?;
        Ok(Self { socket })
    }

    pub fn send(&self, address: &str) -> Result<(), OscError> {
        let message = encode_message(address);
        self.socket.send(&message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::OscSender;

    #[test]
    fn send_delivers_encoded_message() {
        let receiver = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("timeout");
        let target = receiver.local_addr().expect("local addr");

        let sender = OscSender::connect(target).expect("connect");
        sender.send("/cue/9/go").expect("send");

        let mut buf = [0u8; 64];
        let len = receiver.recv(&mut buf).expect("recv");
        assert_eq!(&buf[..len], b"/cue/9/go\0\0\0,\0\0\0");
    }
}
