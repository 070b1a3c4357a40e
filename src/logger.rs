use crate::config::Config;
use crate::router::FunctionEntry;
use hyper::{Method, StatusCode, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Function router started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_registry_ready(entries: &[FunctionEntry]) {
    println!("[Registry] {} function(s) registered:", entries.len());
    for entry in entries {
        println!("  - {}  ({})", entry.endpoint, entry.description);
    }
    println!();
}

pub fn log_registry_deferred() {
    println!("[Registry] Lazy initialization enabled; functions load on first request\n");
}

pub fn log_discovery_skipped(name: &str, err: &impl std::fmt::Display) {
    eprintln!("[WARN] Skipping function '{name}': {err}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_response(status: StatusCode, size: u64) {
    println!("[Response] {status} ({size} bytes)\n");
}

pub fn log_handler_error(name: &str, err: &impl std::fmt::Display) {
    eprintln!("[ERROR] Function '{name}' failed: {err}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
