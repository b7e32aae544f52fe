//! runtime::client
//!
//! Short-lived status exchange with the runtime over TCP.
//!
//! # Deadline
//!
//! The timeout is a hard deadline for the whole exchange, not just the
//! dial. Name resolution, connecting, writing, and every read of the
//! response line each get only the budget that remains. Running out while
//! resolving or dialing is a Connect error; running out afterwards is a
//! Protocol error.
//!
//! Literal `ip:port` endpoints skip the resolver entirely. Hostnames are
//! resolved on a helper thread so a slow resolver cannot outlive the
//! deadline; a lookup that is abandoned finishes in the background.
//!
//! # Lifecycle
//!
//! One connection, one request, one response line. No retries, no
//! pipelining. The stream is dropped (closed) on every exit path.

use std::io::{ErrorKind as IoErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::errors::TransportError;
use super::protocol::{Envelope, Request};
use crate::core::payload::StatusPayload;

/// Largest accepted response line, excluding the newline.
pub const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Default timeout for `status`.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(2);

/// Default timeout for `check`.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(1);

/// A source of live status payloads.
///
/// The engine depends on this trait rather than on TCP directly so the
/// auto-mode fallback can be exercised without sockets.
pub trait RuntimeClient {
    /// Address this client talks to, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Perform one status exchange.
    fn fetch_status(&self, verbose: bool) -> Result<StatusPayload, TransportError>;
}

/// [`RuntimeClient`] over a fresh TCP connection per call.
#[derive(Debug, Clone)]
pub struct TcpRuntimeClient {
    endpoint: String,
    timeout: Duration,
}

impl TcpRuntimeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl RuntimeClient for TcpRuntimeClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_status(&self, verbose: bool) -> Result<StatusPayload, TransportError> {
        fetch_status(&self.endpoint, verbose, self.timeout)
    }
}

/// Request status from the runtime at `endpoint`.
///
/// # Errors
///
/// - Connect: the address did not resolve or no address accepted the
///   connection before the deadline
/// - Protocol: writing the request, reading the response line, or decoding
///   it failed (including running out of time)
/// - Response: the runtime answered `ok = false`
pub fn fetch_status(
    endpoint: &str,
    verbose: bool,
    timeout: Duration,
) -> Result<StatusPayload, TransportError> {
    let deadline = Deadline::after(timeout);

    let mut stream = connect(endpoint, &deadline)?;
    debug!(endpoint, verbose, "connected to runtime");

    let request = Request::status(verbose).to_line()?;
    let remaining = deadline.remaining_or(|| TransportError::protocol("timed out before request"))?;
    stream
        .set_write_timeout(Some(remaining))
        .map_err(TransportError::protocol)?;
    stream
        .write_all(&request)
        .and_then(|()| stream.flush())
        .map_err(|e| TransportError::protocol(format!("write request: {}", e)))?;

    let line = read_line(&mut stream, &deadline)?;
    debug!(bytes = line.len(), "received response line");

    Envelope::from_line(&line)?.into_result()
}

fn connect(endpoint: &str, deadline: &Deadline) -> Result<TcpStream, TransportError> {
    let addrs = resolve_addrs(endpoint, deadline)?;

    let mut last_error = None;
    for addr in addrs {
        let remaining =
            deadline.remaining_or(|| TransportError::connect(endpoint, "timed out"))?;
        match TcpStream::connect_timeout(&addr, remaining) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!(%addr, error = %e, "dial failed");
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(e) => TransportError::connect(endpoint, e),
        None => TransportError::connect(endpoint, "no addresses resolved"),
    })
}

/// Resolve `endpoint` to socket addresses within the deadline.
fn resolve_addrs(endpoint: &str, deadline: &Deadline) -> Result<Vec<SocketAddr>, TransportError> {
    if let Ok(addr) = endpoint.parse::<SocketAddr>() {
        return Ok(vec![addr]);
    }

    let remaining =
        deadline.remaining_or(|| TransportError::connect(endpoint, "timed out resolving address"))?;
    let (tx, rx) = mpsc::channel();
    let host = endpoint.to_string();
    thread::spawn(move || {
        let resolved = host
            .to_socket_addrs()
            .map(|addrs| addrs.collect::<Vec<_>>());
        let _ = tx.send(resolved);
    });

    match rx.recv_timeout(remaining) {
        Ok(Ok(addrs)) => Ok(addrs),
        Ok(Err(e)) => Err(TransportError::connect(endpoint, e)),
        Err(_) => Err(TransportError::connect(endpoint, "timed out resolving address")),
    }
}

fn read_line(stream: &mut TcpStream, deadline: &Deadline) -> Result<Vec<u8>, TransportError> {
    let mut line = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let remaining =
            deadline.remaining_or(|| TransportError::protocol("timed out waiting for response"))?;
        stream
            .set_read_timeout(Some(remaining))
            .map_err(TransportError::protocol)?;

        let n = match stream.read(&mut chunk) {
            Ok(0) => {
                return Err(TransportError::protocol(
                    "connection closed before response line",
                ))
            }
            Ok(n) => n,
            Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
            Err(e) => return Err(TransportError::protocol(format!("read response: {}", e))),
        };

        let newline = chunk[..n].iter().position(|b| *b == b'\n');
        line.extend_from_slice(&chunk[..newline.unwrap_or(n)]);
        if line.len() > MAX_RESPONSE_BYTES {
            return Err(TransportError::protocol(format!(
                "response line exceeds {} bytes",
                MAX_RESPONSE_BYTES
            )));
        }
        if newline.is_some() {
            return Ok(line);
        }
    }
}

/// A fixed point in time by which the exchange must finish.
struct Deadline(Instant);

impl Deadline {
    fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// Time left, or the error from `expired` if none remains.
    ///
    /// Never returns a zero duration; socket timeouts reject zero.
    fn remaining_or(
        &self,
        expired: impl FnOnce() -> TransportError,
    ) -> Result<Duration, TransportError> {
        self.0
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
            .ok_or_else(expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ErrorKind;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;

    /// Accept one connection, record the request line, reply with `response`.
    fn serve_once(response: Vec<u8>) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let _ = reader.get_mut().write_all(&response);
            line
        });
        (addr, handle)
    }

    fn unused_addr() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().to_string()
    }

    #[test]
    fn status_round_trip_over_tcp() {
        let (addr, server) = serve_once(
            b"{\"ok\":true,\"data\":{\"mode\":\"connected\",\"runtime_state\":\"running\",\
              \"graph\":{\"component_count\":2,\"contract_count\":1}}}\n"
                .to_vec(),
        );

        let payload = fetch_status(&addr, false, Duration::from_secs(1)).unwrap();
        assert_eq!(payload.mode(), Some("connected"));
        assert_eq!(
            payload.field("graph", "component_count"),
            Some(&serde_json::json!(2))
        );

        let request = server.join().unwrap();
        assert!(request.contains("\"cmd\":\"status\""));
        assert!(request.contains("\"verbose\":false"));
        assert!(request.ends_with('\n'));
    }

    #[test]
    fn verbose_flag_is_sent() {
        let (addr, server) = serve_once(b"{\"ok\":true,\"data\":null}\n".to_vec());
        let payload = fetch_status(&addr, true, Duration::from_secs(1)).unwrap();
        assert!(payload.is_empty());
        assert!(server.join().unwrap().contains("\"verbose\":true"));
    }

    #[test]
    fn runtime_error_is_response_classified() {
        let (addr, server) = serve_once(
            b"{\"ok\":false,\"error\":{\"code\":\"E1\",\"message\":\"boom\"}}\n".to_vec(),
        );
        let err = fetch_status(&addr, false, Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Response);
        assert_eq!(err.to_string(), "response: E1: boom");
        server.join().unwrap();
    }

    #[test]
    fn garbage_reply_is_protocol_classified() {
        let (addr, server) = serve_once(b"hello there\n".to_vec());
        let err = fetch_status(&addr, false, Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        server.join().unwrap();
    }

    #[test]
    fn close_without_newline_is_protocol_classified() {
        let (addr, server) = serve_once(b"{\"ok\":true}".to_vec());
        let err = fetch_status(&addr, false, Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        server.join().unwrap();
    }

    #[test]
    fn nothing_listening_is_connect_classified() {
        let addr = unused_addr();
        let timeout = Duration::from_millis(500);
        let started = Instant::now();

        let err = fetch_status(&addr, false, timeout).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connect);
        assert!(started.elapsed() < timeout + Duration::from_secs(1));
    }

    #[test]
    fn unresolvable_endpoint_is_connect_classified() {
        let err = fetch_status("no port here", false, Duration::from_millis(200)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connect);
    }

    #[test]
    fn literal_address_skips_resolver() {
        let deadline = Deadline::after(Duration::ZERO);
        let addrs = resolve_addrs("127.0.0.1:9", &deadline).unwrap();
        assert_eq!(addrs, vec!["127.0.0.1:9".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn hostname_resolution_is_bounded_by_deadline() {
        let deadline = Deadline::after(Duration::ZERO);
        let err = resolve_addrs("localhost:9", &deadline).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connect);
        assert!(err.to_string().contains("timed out resolving address"));
    }

    #[test]
    fn silent_peer_times_out_instead_of_hanging() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            // Hold the connection open without answering.
            let _ = release_rx.recv();
            drop(stream);
        });

        let timeout = Duration::from_millis(300);
        let started = Instant::now();
        let err = fetch_status(&addr, false, timeout).unwrap_err();
        let elapsed = started.elapsed();

        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(elapsed >= timeout - Duration::from_millis(50));
        assert!(elapsed < timeout + Duration::from_secs(1));

        release_tx.send(()).unwrap();
        server.join().unwrap();
    }

    #[test]
    fn oversized_reply_is_refused() {
        let (addr, server) = serve_once(vec![b'a'; MAX_RESPONSE_BYTES + 16]);
        let err = fetch_status(&addr, false, Duration::from_secs(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(err.to_string().contains("exceeds"));
        server.join().unwrap();
    }

    #[test]
    fn tcp_client_reports_endpoint() {
        let client = TcpRuntimeClient::new("127.0.0.1:9", Duration::from_millis(10));
        assert_eq!(client.endpoint(), "127.0.0.1:9");
        assert_eq!(client.timeout(), Duration::from_millis(10));
    }
}
