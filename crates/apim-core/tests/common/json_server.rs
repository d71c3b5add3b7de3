//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves one static body with a fixed status and content type, and records
//! the request line of every GET so tests can assert exactly which targets
//! were hit, and how many times.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct JsonServerOptions {
    /// Status line code, e.g. 200 or 404.
    pub status: u16,
    /// Content-Type header value.
    pub content_type: &'static str,
}

impl Default for JsonServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: "application/json",
        }
    }
}

/// Handle to a running test server.
pub struct JsonServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl JsonServer {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:12345`.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Paths of the GET requests served so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `body` with status 200.
/// The server runs until the process exits.
pub fn start(body: &str) -> JsonServer {
    start_with_options(body, JsonServerOptions::default())
}

/// Like `start` but with a custom status/content type.
pub fn start_with_options(body: &str, opts: JsonServerOptions) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let recorded = Arc::clone(&recorded);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &body, &opts, &recorded));
        }
    });

    JsonServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Returns a URL nothing is listening on (bind, take the port, drop the
/// listener). Connecting to it fails fast with a transport error.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &str,
    opts: &JsonServerOptions,
    recorded: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut parts = request.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }
    recorded.lock().unwrap().push(path.to_string());

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        reason,
        opts.content_type,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
