//! Static file server for the mint front-end
//!
//! Serves the built Leptos WASM app from the dist/ directory on port 8080.
//! Unknown paths fall back to index.html for client-side rendering.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Soroban NFTs dev server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// Map a request path onto dist/, keeping only normal path components so
/// `..` segments cannot escape the directory.
fn sanitize_request_path(path: &str) -> PathBuf {
    let mut dist_path = PathBuf::from("dist");
    let requested = Path::new(path.strip_prefix('/').unwrap_or(path));
    for component in requested.components() {
        if let Component::Normal(part) = component {
            dist_path.push(part);
        }
    }
    dist_path
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");

    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    // Map the request path onto dist/; anything that is not a file there
    // gets index.html
    let file_path = if path == "/" || path.is_empty() {
        PathBuf::from("dist/index.html")
    } else {
        let dist_path = sanitize_request_path(path);

        if dist_path.is_dir() || !dist_path.exists() {
            PathBuf::from("dist/index.html")
        } else {
            dist_path
        }
    };

    let content_type = match file_path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    };

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type),
        Err(_) => match fs::read(Path::new("dist/index.html")) {
            Ok(contents) => ("200 OK", contents, "text/html; charset=utf-8"),
            Err(_) => {
                eprintln!("dist/index.html not found; did you run the build?");
                (
                    "404 NOT FOUND",
                    b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>"
                        .to_vec(),
                    "text/html",
                )
            }
        },
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }

    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_path() {
        assert_eq!(
            sanitize_request_path("/app.wasm"),
            PathBuf::from("dist/app.wasm")
        );
        assert_eq!(
            sanitize_request_path("/assets/style.css"),
            PathBuf::from("dist/assets/style.css")
        );
    }

    #[test]
    fn test_sanitize_strips_parent_components() {
        assert_eq!(
            sanitize_request_path("/../Cargo.toml"),
            PathBuf::from("dist/Cargo.toml")
        );
        assert_eq!(
            sanitize_request_path("/../../etc/passwd"),
            PathBuf::from("dist/etc/passwd")
        );
        assert_eq!(
            sanitize_request_path("/a/../../b"),
            PathBuf::from("dist/a/b")
        );
    }
}
