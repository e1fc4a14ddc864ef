use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct ServerHandle {
    recorded: Recorded,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    /// Requests received so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording lock was poisoned.
    pub fn requests(&self) -> Result<Vec<RecordedRequest>, String> {
        self.recorded
            .lock()
            .map(|requests| requests.clone())
            .map_err(|err| format!("recorded requests poisoned: {}", err))
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Canned answers of the fake Meshery server.
#[derive(Debug, Clone)]
pub struct MesheryReplies {
    pub submit_status: u16,
    pub submit_body: String,
    /// Overrides the submission's `Content-Length`; the connection is closed
    /// after `submit_body` either way.
    pub submit_declared_len: Option<usize>,
    pub refresh_status: u16,
    pub refresh_body: String,
}

/// Spawn a fake Meshery server that records every request.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_meshery_server(replies: MesheryReplies) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let thread_recorded = Arc::clone(&recorded);
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => handle_client(stream, &replies, &thread_recorded),
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            recorded,
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(stream: TcpStream, replies: &MesheryReplies, recorded: &Recorded) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&stream) else {
        return;
    };
    let path = request
        .target
        .split_once('?')
        .map_or(request.target.as_str(), |(path, _)| path);
    let (status, body, declared_len) = match (request.method.as_str(), path) {
        ("POST", "/api/load-test-smps") => (
            replies.submit_status,
            replies.submit_body.clone(),
            replies.submit_declared_len,
        ),
        ("GET", "/api/gettoken") => (replies.refresh_status, replies.refresh_body.clone(), None),
        _ => (404, String::new(), None),
    };
    if let Ok(mut requests) = recorded.lock() {
        requests.push(request);
    }

    let response = format!(
        "HTTP/1.1 {} Status\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
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

/// Run the `perfctl` binary from `cwd` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_perfctl<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = perfctl_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "error")
        .env_remove("PERFCTL_LOG")
        .env_remove("MESHERY_SERVER")
        .output()
        .map_err(|err| format!("run perfctl failed: {}", err))
}

fn perfctl_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_perfctl").map_or_else(
        || Err("CARGO_BIN_EXE_perfctl missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
