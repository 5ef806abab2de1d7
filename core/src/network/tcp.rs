use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::trace;

/// Decides whether a single address answers.
///
/// Implementations do not enforce a deadline themselves; the sweep bounds
/// every call with its own timeout and drops the future when it elapses.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: SocketAddr) -> bool;
}

/// Plain TCP handshake. Open means the connect completed.
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: SocketAddr) -> bool {
        match TcpStream::connect(addr).await {
            // The stream is dropped right here, closing the socket.
            Ok(_stream) => true,
            Err(e) => {
                trace!("{addr} rejected: {e}");
                false
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
