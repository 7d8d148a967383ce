//! Static file server for the exchange PWA
//!
//! Serves the trunk build from `dist/` with client-side routing fallback.
//!
//! ## Environment
//!
//! - `EXCHANGE_SERVER_ADDR` - listen address (default `127.0.0.1:8080`)
//! - `EXCHANGE_DIST_DIR` - build output directory (default `dist`)
//! - `EXCHANGE_BASE_PATH` - deployment prefix stripped from request paths (default `/`)

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

use lib_utils::envs::Error as EnvError;
use lib_utils::{get_env_or, get_env_parse};

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);

const NOT_FOUND_BODY: &[u8] = b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";

struct ServerConfig {
    dist: PathBuf,
    base_path: String,
}

fn main() {
    let addr = listen_addr(get_env_parse("EXCHANGE_SERVER_ADDR"));
    let config = ServerConfig {
        dist: PathBuf::from(get_env_or("EXCHANGE_DIST_DIR", "dist")),
        base_path: get_env_or("EXCHANGE_BASE_PATH", "/"),
    };

    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Exchange PWA server running at http://{}{}", addr, config.base_path);
    println!("Serving from {}", config.dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &config),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// `EXCHANGE_SERVER_ADDR` when set and valid, the default otherwise.
fn listen_addr(configured: Result<SocketAddr, EnvError>) -> SocketAddr {
    match configured {
        Ok(addr) => addr,
        Err(EnvError::MissingEnv(_)) => SocketAddr::from(DEFAULT_ADDR),
        Err(e) => {
            eprintln!("Ignoring invalid listen address ({}), using default", e);
            SocketAddr::from(DEFAULT_ADDR)
        }
    }
}

fn handle_client(mut stream: TcpStream, config: &ServerConfig) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let path = request_path(&request_line);
    let relative = strip_base(path, &config.base_path);
    let file_path = resolve_file(&config.dist, relative);

    let response = match fs::read(&file_path) {
        Ok(body) => build_response("200 OK", content_type(&file_path), cache_control(&file_path), &body),
        Err(_) => {
            eprintln!("Not found: {} ({})", path, file_path.display());
            build_response("404 NOT FOUND", "text/html", "no-cache", NOT_FOUND_BODY)
        }
    };

    if let Err(e) = stream.write_all(&response) {
        eprintln!("Failed to write response: {}", e);
        return;
    }
    let _ = stream.flush();
}

/// Path of a request line, without the query string.
fn request_path(request_line: &str) -> &str {
    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    full_path.split_once('?').map_or(full_path, |(path, _)| path)
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// File under `dist` for `path`; directories, missing files and paths that try to
/// leave `dist` fall back to `index.html` for client-side routing.
fn resolve_file(dist: &Path, path: &str) -> PathBuf {
    let index = dist.join("index.html");
    let relative = Path::new(path.trim_start_matches('/'));
    if relative.as_os_str().is_empty() || relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return index;
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// The worker script and the shell are revalidated on every load so new versions
/// are picked up.
fn cache_control(path: &Path) -> &'static str {
    match path.file_name().and_then(|s| s.to_str()) {
        Some("sw.js") | Some("index.html") => "no-cache",
        _ => "public, max-age=3600",
    }
}

fn build_response(status: &str, content_type: &str, cache_control: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nCache-Control: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        cache_control,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn temp_dist() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("screenshots")).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::write(root.join("sw.js"), "self.addEventListener('fetch', () => {});").unwrap();
        fs::write(root.join("screenshots/home.png"), [0x89, b'P', b'N', b'G']).unwrap();
        dir
    }

    #[test]
    fn test_request_path_drops_query() {
        assert_eq!(request_path("GET /trade?pair=BTC HTTP/1.1"), "/trade");
        assert_eq!(request_path("GET / HTTP/1.1"), "/");
        assert_eq!(request_path(""), "/");
    }

    #[test]
    fn test_listen_addr() {
        let default = SocketAddr::from(DEFAULT_ADDR);
        assert_eq!(listen_addr(Err(EnvError::MissingEnv("EXCHANGE_SERVER_ADDR"))), default);
        assert_eq!(listen_addr(Err(EnvError::WrongFormat("EXCHANGE_SERVER_ADDR"))), default);
        let custom: SocketAddr = "0.0.0.0:3000".parse().unwrap();
        assert_eq!(listen_addr(Ok(custom)), custom);
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/pwa/market", "/pwa/"), "/market");
        assert_eq!(strip_base("/pwa", "/pwa/"), "");
        assert_eq!(strip_base("/pwabc", "/pwa/"), "/pwabc");
        assert_eq!(strip_base("/market", "/"), "/market");
    }

    #[test]
    fn test_resolve_file_and_spa_fallback() {
        let dir = temp_dist();
        let dist = dir.path();
        assert_eq!(resolve_file(dist, "/sw.js"), dist.join("sw.js"));
        assert_eq!(resolve_file(dist, "/screenshots/home.png"), dist.join("screenshots/home.png"));
        assert_eq!(resolve_file(dist, "/"), dist.join("index.html"));
        assert_eq!(resolve_file(dist, "/install"), dist.join("index.html"));
        assert_eq!(resolve_file(dist, "/screenshots"), dist.join("index.html"));
        assert_eq!(resolve_file(dist, "/../etc/passwd"), dist.join("index.html"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("manifest.webmanifest")), "application/manifest+json");
        assert_eq!(content_type(Path::new("pwa-192x192.png")), "image/png");
        assert_eq!(content_type(Path::new("mask-icon.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_service_worker_not_cached() {
        assert_eq!(cache_control(Path::new("dist/sw.js")), "no-cache");
        assert_eq!(cache_control(Path::new("dist/app.js")), "public, max-age=3600");
    }

    #[test]
    fn test_build_response_headers() {
        let response = build_response("200 OK", "text/css", "no-cache", b"body{}");
        let text = String::from_utf8(response).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 6\r\n"));
        assert!(text.ends_with("\r\n\r\nbody{}"));
    }
}
