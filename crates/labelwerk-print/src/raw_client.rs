// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw TCP print client (JetDirect, port 9100).
//
// Open a socket, write the program, close.  Nothing is read back: success
// means the bytes were handed to the network stack, not that the label
// came out.  One connection per job.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use labelwerk_core::error::TransportError;
use labelwerk_core::types::PrinterState;

/// Write size per `write_all` call.
const CHUNK_SIZE: usize = 8192;

/// Send `payload` to `addr` (`host:port`).
///
/// `timeout` bounds the connect and, separately, the write/flush/close.
#[instrument(skip(payload, timeout))]
pub async fn send_raw(addr: &str, payload: &[u8], timeout: Duration) -> Result<(), TransportError> {
    info!(addr = %addr, total = payload.len(), "connecting via raw TCP");

    let mut stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| TransportError::ConnectTimeout {
            addr: addr.to_owned(),
            timeout_secs: timeout.as_secs(),
        })?
        .map_err(|e| TransportError::from_connect(addr, e))?;

    let write = async {
        let mut sent = 0usize;
        for chunk in payload.chunks(CHUNK_SIZE) {
            stream.write_all(chunk).await?;
            sent += chunk.len();
            debug!(sent, total = payload.len(), "raw TCP progress");
        }
        stream.flush().await?;
        stream.shutdown().await
    };

    tokio::time::timeout(timeout, write)
        .await
        .map_err(|_| TransportError::SendTimeout {
            addr: addr.to_owned(),
            timeout_secs: timeout.as_secs(),
        })?
        .map_err(|e| TransportError::Io {
            addr: addr.to_owned(),
            source: e,
        })?;

    info!(addr = %addr, total = payload.len(), "raw TCP print job sent");
    Ok(())
}

/// Reachability of `host:port`.
///
/// Resolving and connecting share the one `timeout`.  A name that
/// definitively does not resolve is `Error`, since no connection could even
/// be attempted.  A slow resolver, a failed connect or a timed-out connect is
/// `Offline`.  The connection is dropped immediately.
#[instrument(skip(timeout))]
pub async fn probe(addr: &str, timeout: Duration) -> PrinterState {
    probe_via(addr, timeout, resolve_first).await
}

async fn resolve_first(addr: String) -> std::io::Result<Option<SocketAddr>> {
    Ok(tokio::net::lookup_host(addr).await?.next())
}

async fn probe_via<R, F>(addr: &str, timeout: Duration, resolve: R) -> PrinterState
where
    R: FnOnce(String) -> F,
    F: Future<Output = std::io::Result<Option<SocketAddr>>>,
{
    let deadline = Instant::now() + timeout;

    let target = match tokio::time::timeout_at(deadline, resolve(addr.to_owned())).await {
        Ok(Ok(Some(target))) => target,
        Ok(Ok(None)) => {
            warn!(addr = %addr, "printer address resolves to nothing");
            return PrinterState::Error;
        }
        Ok(Err(e)) => {
            warn!(addr = %addr, error = %e, "printer address does not resolve");
            return PrinterState::Error;
        }
        Err(_) => {
            warn!(addr = %addr, timeout_secs = timeout.as_secs(), "printer address lookup timed out");
            return PrinterState::Offline;
        }
    };

    match tokio::time::timeout_at(deadline, TcpStream::connect(target)).await {
        Ok(Ok(_)) => {
            debug!(addr = %addr, "printer online");
            PrinterState::Online
        }
        Ok(Err(e)) => {
            warn!(addr = %addr, error = %e, "printer offline");
            PrinterState::Offline
        }
        Err(_) => {
            warn!(addr = %addr, timeout_secs = timeout.as_secs(), "printer probe timed out");
            PrinterState::Offline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_secs(2);

    /// An address nothing listens on.
    async fn closed_addr() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);
        addr
    }

    #[tokio::test]
    async fn delivers_payload_verbatim() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let receiver = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let payload = "^XA\n^FO20,20^FDÜbergabe^FS\n^XZ\n".repeat(600);
        send_raw(&addr, payload.as_bytes(), TIMEOUT).await.unwrap();

        assert_eq!(receiver.await.unwrap(), payload.as_bytes());
    }

    #[tokio::test]
    async fn refused_connection_is_classified() {
        let addr = closed_addr().await;
        let err = send_raw(&addr, b"^XA^XZ", TIMEOUT).await.unwrap_err();
        assert!(matches!(err, TransportError::Refused { addr: a, .. } if a == addr));
    }

    #[tokio::test]
    async fn probe_reports_online_and_offline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let online = listener.local_addr().unwrap().to_string();
        assert_eq!(probe(&online, TIMEOUT).await, PrinterState::Online);

        let offline = closed_addr().await;
        assert_eq!(probe(&offline, TIMEOUT).await, PrinterState::Offline);
    }

    #[tokio::test]
    async fn unresolvable_address_is_error() {
        assert_eq!(probe("10.1.0.48:port", TIMEOUT).await, PrinterState::Error);
    }

    #[tokio::test]
    async fn stalled_lookup_is_bounded_and_offline() {
        let timeout = Duration::from_millis(100);
        let started = std::time::Instant::now();
        let state = probe_via("prt-slow.example:9100", timeout, |_| {
            std::future::pending::<std::io::Result<Option<SocketAddr>>>()
        })
        .await;
        assert_eq!(state, PrinterState::Offline);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn slow_lookup_within_budget_still_connects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let target = listener.local_addr().unwrap();
        // The lookup eats most of the budget but still finishes in time.
        let state = probe_via("prt-local:9100", Duration::from_secs(2), move |_| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Some(target))
        })
        .await;
        assert_eq!(state, PrinterState::Online);
    }

    #[tokio::test]
    async fn empty_lookup_is_error() {
        let state = probe_via("prt-none:9100", TIMEOUT, |_| async { Ok(None) }).await;
        assert_eq!(state, PrinterState::Error);
    }
}
