//! Mock of the identity provider and status service, answering canned
//! replies in order.

use std::{
    io::Read,
    thread,
    time::Duration,
};
use tiny_http::{Response, Server};

pub struct MockService {
    pub base_url: String,
}

impl MockService {
    pub fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        thread::spawn(move || {
            for (status, body) in replies {
                let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) else {
                    return;
                };
                let mut ignored = Vec::new();
                let _ = request.as_reader().read_to_end(&mut ignored);
                let _ = request.respond(Response::from_string(body).with_status_code(status));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
        }
    }
}
