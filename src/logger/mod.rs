//! Logger module
//!
//! Console logging for server lifecycle, per-request access lines, and
//! errors. The routing core itself never logs: every failure it produces is
//! already visible to the client as a JSON response, so logging happens at
//! the connection boundary only.

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config, route_count: usize) {
    println!("======================================");
    println!("JSON API server started successfully");
    println!("Listening on: http://{addr}");
    println!("Registered routes: {route_count}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// Access line for one dispatched request
pub fn log_dispatch(method: &str, target: &str, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{method} {target}\" {status} {body_bytes}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
