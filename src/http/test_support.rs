use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: String,
    pub(crate) target: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: String,
}

impl RecordedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map_or(self.target.as_str(), |(path, _)| path)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub(crate) method: &'static str,
    pub(crate) path: &'static str,
    pub(crate) status: u16,
    pub(crate) body: String,
    /// `Content-Length` to announce instead of the real body length.
    pub(crate) declared_len: Option<usize>,
}

type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

pub(crate) struct MockServer {
    pub(crate) base_url: String,
    recorded: Recorded,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockServer {
    pub(crate) fn requests(&self) -> Result<Vec<RecordedRequest>, String> {
        self.recorded
            .lock()
            .map(|requests| requests.clone())
            .map_err(|err| format!("recorded requests poisoned: {}", err))
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Serves `routes` on an ephemeral port, recording every request.
/// Unknown routes get a 404.
pub(crate) fn spawn_mock_server(routes: Vec<Route>) -> Result<MockServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let thread_recorded = Arc::clone(&recorded);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            match listener.accept() {
                Ok((stream, _)) => handle_client(stream, &routes, &thread_recorded),
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(MockServer {
        base_url: format!("http://{}", addr),
        recorded,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(stream: TcpStream, routes: &[Route], recorded: &Recorded) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&stream) else {
        return;
    };
    let route = routes
        .iter()
        .find(|route| route.method == request.method && route.path == request.path());
    let (status, body, declared_len) = route.map_or((404, String::new(), None), |route| {
        (route.status, route.body.clone(), route.declared_len)
    });
    if let Ok(mut requests) = recorded.lock() {
        requests.push(request);
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        declared_len.unwrap_or(body.len()),
        body
    );
    let mut stream = stream;
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_owned();
    let target = parts.next()?.to_owned();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_owned(), value.trim().to_owned()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
