//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one fixed status line and body, and records the
//! raw request head so tests can inspect the headers the client sent.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Handle to a running test server.
pub struct TestServer {
    /// Base URL, e.g. `http://127.0.0.1:12345/`.
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Raw request heads received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

/// Starts a server in a background thread replying `status` (e.g. `"200 OK"`)
/// with `body` as `application/json`. The server runs until the process exits.
pub fn start(status: &'static str, body: &str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    TestServer {
        url: format!("http://127.0.0.1:{port}/"),
        requests,
    }
}

fn handle(mut stream: TcpStream, status: &str, body: &str, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    if let Ok(mut log) = seen.lock() {
        log.push(String::from_utf8_lossy(&buf[..n]).into_owned());
    }
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json; charset=utf-8\r\n\
Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
