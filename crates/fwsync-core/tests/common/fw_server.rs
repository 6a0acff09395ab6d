//! Minimal HTTP/1.1 server for sync integration tests.
//!
//! Serves a routing table of paths with per-path status and body, and
//! counts hits per path so tests can assert which requests were (not)
//! issued. Unknown paths return 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
pub struct Route {
    pub path: String,
    pub status: u32,
    pub body: Vec<u8>,
}

pub fn route(path: &str, status: u32, body: &[u8]) -> Route {
    Route {
        path: path.to_string(),
        status,
        body: body.to_vec(),
    }
}

pub struct FwServer {
    pub base_url: String,
    routes: Arc<Mutex<Vec<Route>>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl FwServer {
    /// Number of requests the server has seen for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Registers another route after startup (e.g. a manifest whose body
    /// needs the server's own base URL).
    pub fn add_route(&self, r: Route) {
        self.routes.lock().unwrap().push(r);
    }
}

/// Starts a server in a background thread serving `routes`. The server runs
/// until the process exits.
pub fn start(routes: Vec<Route>) -> FwServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(Mutex::new(routes));
    let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));
    let routes_bg = Arc::clone(&routes);
    let hits_bg = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes_bg);
            let hits = Arc::clone(&hits_bg);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    FwServer {
        base_url: format!("http://127.0.0.1:{}", port),
        routes,
        hits,
    }
}

fn handle(mut stream: TcpStream, routes: &Mutex<Vec<Route>>, hits: &Mutex<HashMap<String, usize>>) {
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
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };

    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let matched = routes.lock().unwrap().iter().find(|r| r.path == path).cloned();
    match matched {
        Some(r) => respond(&mut stream, r.status, &r.body),
        None => respond(&mut stream, 404, b"not found"),
    }
}

fn respond(stream: &mut TcpStream, status: u32, body: &[u8]) {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns the request target path from the first request line.
fn request_path(request: &str) -> Option<String> {
    let first = request.lines().next()?;
    let mut parts = first.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(str::to_string)
}
