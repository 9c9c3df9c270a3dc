// tests/fetch_status.rs
//
// HTTP against a one-shot local server; no outside network.
//
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use cacao_scrape::core::net::http_get;
use cacao_scrape::error::ScrapeError;
use cacao_scrape::specs::reviews;

const PAGE: &str = include_str!("fixtures/cacao_sample.html");

/// Serve exactly one response, return the URL to hit.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/index.html", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        // drain request headers
        while reader.read_line(&mut line).unwrap() > 0 {
            if line == "\r\n" { break; }
            line.clear();
        }
        let mut stream = stream;
        let resp = format!(
            "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (url, handle)
}

#[test]
fn non_success_status_is_an_error() {
    let (url, server) = serve_once("HTTP/1.1 404 Not Found", "gone");
    match http_get(&url) {
        Err(ScrapeError::Status { status, url: u }) => {
            assert_eq!(status, 404);
            assert_eq!(u, url);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn fetch_extracts_served_page() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", PAGE);
    let table = reviews::fetch(&url).unwrap();
    assert_eq!(table.len(), 15);
    assert_eq!(table.companies()[0], "A. Morin");
    server.join().unwrap();
}
