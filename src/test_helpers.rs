//! Common test helper functions shared across test modules.
//!
//! Provides a one-shot HTTP server so the reqwest clients can be exercised
//! against canned responses without leaving localhost.
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};
use url::Url;

/// A request as received by [`serve_once`].
#[derive(Debug)]
pub struct CapturedRequest {
    /// e.g. "GET /api/v4/merge_requests?state=opened HTTP/1.1"
    pub request_line: String,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == &name.to_lowercase())
            .map(|(_, value)| value.as_str())
    }
}

/// Build a raw HTTP/1.1 response with a JSON body.
pub fn http_response(
    status: &str,
    extra_headers: &[&str],
    body: &str,
) -> String {
    let mut response = format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n",
        body.len()
    );
    for header in extra_headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    response.push_str(body);
    response
}

/// Accept a single connection on an ephemeral port, answer it with
/// `response` and hand back what the client sent.
///
/// # Example
/// ```ignore
/// let (base, server) = serve_once(http_response("200 OK", &[], "[]")).await;
/// // point a client at `base` ...
/// let captured = server.await.unwrap();
/// ```
pub async fn serve_once(
    response: String,
) -> (Url, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = Url::parse(&format!("http://{addr}/")).unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut raw = vec![];
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let read = stream.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before headers ended");
            raw.extend_from_slice(&chunk[..read]);
            if let Some(pos) = find(&raw, b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| {
                (key.trim().to_lowercase(), value.trim().to_string())
            })
            .collect();

        let content_length = headers
            .iter()
            .find(|(key, _)| key == "content-length")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = header_end + 4;
        while raw.len() < body_start + content_length {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
        }

        let body = String::from_utf8_lossy(&raw[body_start..]).to_string();

        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        CapturedRequest {
            request_line,
            headers,
            body,
        }
    });

    (base, handle)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
