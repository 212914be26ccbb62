//! Minimal HTTP/1.1 server for fetch integration tests.
//!
//! Serves a fixed status line and body to every connection. The server runs
//! until the test process exits.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts a server answering every request with `status_line` and `body`.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/").
pub fn serve(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let mut stream = stream;
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/html; charset=utf-8\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://127.0.0.1:{port}/")
}

/// Returns a URL on a port that nothing is listening on.
pub fn unused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
