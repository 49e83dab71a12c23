// tests/fetch_failure.rs
//
// Real HTTP against a throwaway local server.
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use top10_scrape::config::options::ScrapeOptions;
use top10_scrape::core::{Fetch, HttpFetcher};
use top10_scrape::error::FetchError;
use top10_scrape::scrape::{collect_shows, PlatformOutcome};

/// Serve exactly one canned response, returning the base URL and the captured request.
fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let n = stream.read(&mut buf).unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).into_owned();

        let resp = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base, handle)
}

fn opts(base: String) -> ScrapeOptions {
    ScrapeOptions {
        base_url: base,
        pause: Duration::ZERO,
        timeout: Duration::from_secs(5),
        ..ScrapeOptions::default()
    }
}

#[test]
fn http_500_is_a_status_error() {
    let (base, server) = serve_once("500 Internal Server Error", "oops");
    let opts = opts(base);
    let fetcher = HttpFetcher::new(&opts).unwrap();

    let err = fetcher.fetch(&opts.base_url).unwrap_err();
    assert_eq!(err.status(), Some(500));
    server.join().unwrap();
}

#[test]
fn http_500_degrades_to_zero_rows_for_every_platform() {
    let (base, server) = serve_once("500 Internal Server Error", "oops");
    let opts = opts(base);
    let fetcher = HttpFetcher::new(&opts).unwrap();

    let report = collect_shows(&fetcher, &opts, None);
    server.join().unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.outcomes.len(), 7);
    for (_, outcome) in &report.outcomes {
        match outcome {
            PlatformOutcome::FetchFailed(reason) => assert!(reason.contains("500")),
            other => panic!("expected fetch failure, got {other:?}"),
        }
    }
}

#[test]
fn sends_browser_user_agent_and_parses_body() {
    let body = r#"<html><body>
        <div class="card">
          <div class="text-gray-500">Top shows</div>
          <a href="/top10/netflix/world/">netflix</a>
          <a href="/title/dark/" title="Dark">Dark</a>
        </div></body></html>"#;
    let (base, server) = serve_once("200 OK", body);
    let opts = opts(base.clone());
    let fetcher = HttpFetcher::new(&opts).unwrap();

    let report = collect_shows(&fetcher, &opts, None);
    let request = server.join().unwrap();

    assert!(request.starts_with("GET / HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("user-agent: mozilla/5.0 (windows nt 10.0"));
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results.entries()[0].url, format!("{base}/title/dark/"));
    assert_eq!(report.outcome("netflix"), Some(&PlatformOutcome::Found(1)));
}

#[test]
fn unreachable_origin_is_a_transport_error() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let opts = opts(format!("http://127.0.0.1:{port}"));
    let fetcher = HttpFetcher::new(&opts).unwrap();

    let err = fetcher.fetch(&opts.base_url).unwrap_err();
    assert_eq!(err.status(), None);
}

#[test]
fn silent_origin_times_out_after_the_pause() {
    // accept the connection, then never answer
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let pause = Duration::from_millis(300);
    let timeout = Duration::from_millis(500);
    let opts = ScrapeOptions {
        pause,
        timeout,
        ..opts(base)
    };
    let fetcher = HttpFetcher::new(&opts).unwrap();

    let started = Instant::now();
    let err = fetcher.fetch(&opts.base_url).unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, FetchError::Transport(_)), "{err}");
    assert_eq!(err.status(), None);
    assert!(elapsed >= pause + timeout, "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "returned after {elapsed:?}");
    server.join().unwrap();
}

#[test]
fn invalid_user_agent_is_rejected_up_front() {
    let opts = ScrapeOptions {
        user_agent: "bad\nagent".to_string(),
        ..opts("http://127.0.0.1:1".to_string())
    };
    match HttpFetcher::new(&opts) {
        Err(FetchError::InvalidHeader(value)) => assert_eq!(value, "bad\nagent"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("fetcher built with an invalid header"),
    }
}
