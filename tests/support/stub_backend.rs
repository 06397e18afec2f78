use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver},
    thread,
    time::Duration,
};

/// One HTTP request as seen by the stub.
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Local HTTP server that answers the first `responses.len()` connections.
pub struct StubBackend {
    pub url: String,
    requests: Receiver<CapturedRequest>,
}

impl StubBackend {
    pub fn respond_json(status: u16, body: &str) -> Self {
        Self::respond_sequence(vec![(status, body.to_string(), Duration::ZERO)])
    }

    /// Answer connections in order, sleeping `delay` before each reply.
    pub fn respond_sequence(responses: Vec<(u16, String, Duration)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
        let addr = listener.local_addr().expect("stub address");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for (status, body, delay) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                let tx = tx.clone();
                thread::spawn(move || serve(stream, status, &body, delay, &tx));
            }
        });
        Self {
            url: format!("http://{addr}"),
            requests: rx,
        }
    }

    pub fn next_request(&self, timeout: Duration) -> Option<CapturedRequest> {
        self.requests.recv_timeout(timeout).ok()
    }
}

fn serve(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    delay: Duration,
    tx: &mpsc::Sender<CapturedRequest>,
) {
    if let Some(request) = read_request(&mut stream) {
        let _ = tx.send(request);
    }
    thread::sleep(delay);
    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok()?;
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..read]);
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
    }
    let body_end = (body_start + content_length).min(data.len());
    let (request_line, headers) = head.split_once("\r\n").unwrap_or((head.as_str(), ""));
    Some(CapturedRequest {
        request_line: request_line.to_string(),
        headers: headers.to_string(),
        body: String::from_utf8_lossy(&data[body_start..body_end]).to_string(),
    })
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"\r\n\r\n")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// URL of a port with nothing listening, so connections are refused.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
