//! Loader tests against a local HTTP server
//!
//! A throwaway tokio listener stands in for the published sheet so the
//! loader's network path runs without touching the internet.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use sheetgallery_core::{GalleryConfig, GalleryError, GalleryState, SheetLoader, SheetSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Test Utilities
// ============================================================================

/// A local sheet host: base URL, request count and the request lines seen.
struct TestServer {
    url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// `host:port` as it appears in URLs
    fn authority(&self) -> String {
        self.url
            .trim_start_matches("http://")
            .trim_end_matches("/sheet.csv")
            .to_string()
    }

    fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `body` with `status` to every connection; returns the URL and a hit counter.
async fn serve(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let server = start_server(status, body).await;
    (server.url, server.hits)
}

async fn start_server(status: &'static str, body: &'static str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let counter = hits.clone();
    let seen = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request = String::from_utf8_lossy(&buf);
            if let Some(line) = request.lines().next() {
                seen.lock().unwrap().push(line.to_string());
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    TestServer {
        url: format!("http://{}/sheet.csv", addr),
        hits,
        requests,
    }
}

/// Accept connections and never answer; returns the URL.
async fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        // Hold sockets open so the client sees a stalled response, not a reset
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    format!("http://{}/sheet.csv", addr)
}

fn loader(url: String) -> SheetLoader {
    let config = GalleryConfig::default()
        .with_source(SheetSource::Url(url))
        .with_timeout(Duration::from_secs(5));
    SheetLoader::new(config).unwrap()
}

/// URL of a port that nothing is listening on
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/sheet.csv", addr)
}

// ============================================================================
// Loader Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_and_parse() {
    let (url, hits) = serve(
        "200 OK",
        "id,image_url\n001,http://x/a.png\n002,\n003,http://x/c.png",
    )
    .await;

    let records = loader(url).load().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].image_url, "http://x/c.png");
    assert_eq!(hits.load(Ordering::SeqCst), 1, "exactly one fetch per load");
}

#[tokio::test]
async fn test_non_success_status() {
    let (url, _) = serve("404 Not Found", "missing").await;

    match loader(url.clone()).load().await {
        Err(GalleryError::HttpStatus { status, url: got }) => {
            assert_eq!(status, 404);
            assert_eq!(got, url);
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let result = loader(dead_url().await).load().await;
    assert!(matches!(result, Err(GalleryError::Network(_))));
}

#[tokio::test]
async fn test_network_failure_settles_gallery_empty() {
    let loader = loader(dead_url().await);

    let mut state = GalleryState::new();
    assert!(state.is_loading());

    state.apply(loader.load().await);

    assert!(!state.is_loading());
    assert!(state.tiles().is_empty());
    assert!(loader.load_or_empty().await.is_empty());
}

#[tokio::test]
async fn test_reloading_same_sheet_is_identical() {
    let (url, hits) = serve("200 OK", "id,image_url\n1,http://x/1.png\n2,http://x/2.png\n").await;
    let loader = loader(url);

    let mut first = GalleryState::new();
    first.apply(loader.load().await);
    let mut second = GalleryState::new();
    second.apply(loader.load().await);

    assert_eq!(first.tiles(), second.tiles());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_timeout_settles_gallery_empty() {
    let config = GalleryConfig::default()
        .with_source(SheetSource::Url(serve_silently().await))
        .with_timeout(Duration::from_millis(300));
    let loader = SheetLoader::new(config).unwrap();

    let started = Instant::now();
    let result = loader.load().await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(GalleryError::Network(_))), "got {:?}", result);
    assert!(elapsed < Duration::from_secs(2), "timed out after {:?}", elapsed);

    let mut state = GalleryState::new();
    state.apply(result);
    assert!(!state.is_loading());
    assert!(state.tiles().is_empty());
}

#[tokio::test]
async fn test_html_export_link_fetched_as_csv() {
    let server = start_server("200 OK", "id,image_url\n001,http://x/a.png\n").await;
    let host = server.authority();
    let html_url = format!("http://{}/d/e/KEY/pubhtml?gid=0&single=true&output=html", host);

    let loader = loader(html_url).with_export_host(host.clone());
    let records = loader.load().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        server.request_lines(),
        vec!["GET /d/e/KEY/pub?gid=0&single=true&output=csv HTTP/1.1".to_string()]
    );
}

#[tokio::test]
async fn test_other_hosts_fetched_verbatim() {
    let server = start_server("200 OK", "id,image_url\n").await;
    let url = format!("{}?output=html", server.url);

    loader(url).load().await.unwrap();

    assert_eq!(
        server.request_lines(),
        vec!["GET /sheet.csv?output=html HTTP/1.1".to_string()]
    );
}
