//! Blocking one-shot HTTP server for driving the client in tests.

use std::{
    io::Read,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};
use tiny_http::{Header, Response, Server};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A request as seen by the mock server.
#[derive(Debug)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Canned reply for one request.
pub struct Reply {
    pub status: u16,
    pub body: &'static str,
}

pub fn reply(status: u16, body: &'static str) -> Reply {
    Reply { status, body }
}

pub struct MockServer {
    pub base_url: String,
    requests: mpsc::Receiver<Recorded>,
    _handle: JoinHandle<()>,
}

impl MockServer {
    /// Serve `replies` in order, one per incoming request, then stop.
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let (tx, requests) = mpsc::channel();

        let handle = thread::spawn(move || {
            for reply in replies {
                let Ok(Some(mut request)) = server.recv_timeout(RECV_TIMEOUT) else {
                    return;
                };
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).unwrap();
                let recorded = Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    headers: request
                        .headers()
                        .iter()
                        .map(|h| (h.field.as_str().to_string(), h.value.as_str().to_string()))
                        .collect(),
                    body,
                };
                let _ = tx.send(recorded);

                let response = Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
            _handle: handle,
        }
    }

    /// Next request the server answered.
    pub fn recorded(&self) -> Recorded {
        self.requests.recv_timeout(RECV_TIMEOUT).unwrap()
    }

    /// Panics if any request reached the server so far.
    pub fn assert_untouched(&self) {
        assert!(self.requests.try_recv().is_err(), "unexpected request");
    }
}
