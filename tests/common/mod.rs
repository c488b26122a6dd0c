//! Shared utilities for integration testing.
//!
//! Provides a programmable mock upstream speaking raw HTTP/1.1 over TCP so
//! tests can inject wire-level faults the client must classify.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// What the mock upstream does with one request.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Respond 200 with the given body.
    Ok(String),

    /// Respond with an arbitrary status and body.
    Status(u16, String),

    /// Accept the connection, read the request, close without responding.
    EmptyResponse,

    /// Write random non-HTTP bytes, then close.
    RandomDataThenClose,

    /// Sleep for a fixed delay, then respond 200 with the body.
    FixedDelay(u64, String),

    /// Sleep for a uniformly random delay in `[min_ms, max_ms]`, then 200.
    RandomDelay(u64, u64, String),

    /// Respond 200 promptly, then drip one body byte per interval forever.
    ///
    /// Each individual read completes within the interval, so only an
    /// end-to-end deadline can terminate the call.
    TrickleBody(u64),
}

/// Start a programmable mock upstream on an ephemeral port.
///
/// The closure decides the behavior for each incoming request.
pub async fn start_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Behavior> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head so the client finishes writing.
                        let mut buf = [0u8; 2048];
                        let _ = socket.read(&mut buf).await;

                        match f().await {
                            Behavior::Ok(body) => {
                                write_response(&mut socket, 200, &body).await;
                            }
                            Behavior::Status(status, body) => {
                                write_response(&mut socket, status, &body).await;
                            }
                            Behavior::EmptyResponse => {
                                let _ = socket.shutdown().await;
                            }
                            Behavior::RandomDataThenClose => {
                                let mut junk = [0u8; 64];
                                for byte in &mut junk {
                                    *byte = fastrand::u8(..);
                                }
                                // Make sure the first byte can never start a
                                // valid status line.
                                junk[0] = b'%';
                                let _ = socket.write_all(&junk).await;
                                let _ = socket.shutdown().await;
                            }
                            Behavior::FixedDelay(delay_ms, body) => {
                                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                                write_response(&mut socket, 200, &body).await;
                            }
                            Behavior::RandomDelay(min_ms, max_ms, body) => {
                                let delay = fastrand::u64(min_ms..=max_ms);
                                tokio::time::sleep(Duration::from_millis(delay)).await;
                                write_response(&mut socket, 200, &body).await;
                            }
                            Behavior::TrickleBody(interval_ms) => {
                                let head =
                                    "HTTP/1.1 200 OK\r\nContent-Length: 100000\r\nConnection: close\r\n\r\n";
                                let _ = socket.write_all(head.as_bytes()).await;
                                loop {
                                    if socket.write_all(b"x").await.is_err() {
                                        break;
                                    }
                                    let _ = socket.flush().await;
                                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                                }
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn write_response(socket: &mut tokio::net::TcpStream, status: u16, body: &str) {
    let status_text = match status {
        200 => "200 OK",
        404 => "404 Not Found",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };

    let response_str = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// JSON body matching the movies the upstream would serve.
#[allow(dead_code)]
pub fn movies_body() -> String {
    r#"[
        {"movie_id": 1, "name": "Batman Begins", "cast": ["Christian Bale", "Katie Holmes"], "year": 2005, "release_date": "2005-06-15"},
        {"movie_id": 2, "name": "Dark Knight", "cast": ["Christian Bale", "Heath Ledger"], "year": 2008, "release_date": "2008-07-18"}
    ]"#
    .to_string()
}
