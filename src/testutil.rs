//! Test helpers: a stub doorbell answering canned HTTP responses.
//!
//! The stub listens on a loopback port, records every raw request it sees,
//! and answers each one with a fixed status line and body. Tests assert on
//! the recorded requests instead of on logging side effects.

use crate::config::DeviceConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub struct StubDevice {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    accept_task: JoinHandle<()>,
}

impl StubDevice {
    /// Start a stub that answers every request with the given status line
    /// (e.g. `"403 Forbidden"`) and body.
    pub async fn start(status_line: &'static str, body: &'static str) -> Self {
        Self::start_on(0, status_line, body).await
    }

    /// Start a stub on a specific loopback port (0 = ephemeral).
    pub async fn start_on(port: u16, status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        let accept_task = tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    if let Some(request) = read_request(&mut socket).await {
                        recorded.lock().await.push(request);
                    }
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            addr,
            requests,
            accept_task,
        }
    }

    /// A config pointing at this stub.
    pub fn config(&self) -> DeviceConfig {
        DeviceConfig {
            id: "frontdoor".to_string(),
            name: "Front Door".to_string(),
            host: "127.0.0.1".to_string(),
            port: self.addr.port().to_string(),
            token: "testtoken".to_string(),
            verify_tls: false,
        }
    }

    /// A config pointing at a loopback port with nothing listening on it.
    pub async fn unreachable_config() -> DeviceConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut config = Self::offline_config();
        config.port = port.to_string();
        config
    }

    /// A config for tests that never touch the network.
    pub fn offline_config() -> DeviceConfig {
        DeviceConfig {
            id: "frontdoor".to_string(),
            name: "Front Door".to_string(),
            host: "127.0.0.1".to_string(),
            port: "9".to_string(),
            token: "testtoken".to_string(),
            verify_tls: false,
        }
    }

    /// All raw requests recorded so far.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    /// The one request a single-exchange test is expected to have produced.
    pub async fn single_request(&self) -> String {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for StubDevice {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

/// Read one full HTTP request (headers plus Content-Length body).
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        if let Some(header_end) = find_subsequence(&data, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&data[..header_end]);
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    if data.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&data).to_string())
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
