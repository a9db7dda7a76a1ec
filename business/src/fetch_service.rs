//! Injectable HTTP transport.
//!
//! The query cache talks to the network through this trait so tests can swap
//! in a scripted transport. The production implementation delegates to
//! `ehttp`, whose callback style fits an immediate-mode UI loop: the request
//! runs off-thread and the completion callback fires without blocking frames.

use std::fmt::Debug;

use ehttp::{Request, Response, Result};

pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

/// Scripted transport for deterministic tests.
///
/// Responses are queued in order with [`MockFetcher::push_response`] and every
/// request URL is recorded. In deferred mode callbacks are held until
/// [`MockFetcher::flush`], which lets tests observe the in-flight window
/// (request coalescing, stale-generation discard).
#[cfg(test)]
pub struct MockFetcher {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<Response>>>,
    requests: std::sync::Mutex<Vec<String>>,
    #[allow(clippy::type_complexity)]
    held: std::sync::Mutex<Vec<Box<dyn FnOnce(Result<Response>) + Send + 'static>>>,
    deferred: bool,
}

#[cfg(test)]
impl Debug for MockFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFetcher")
            .field("deferred", &self.deferred)
            .field("request_count", &self.request_count())
            .finish()
    }
}

#[cfg(test)]
impl MockFetcher {
    /// Transport that answers each request immediately from the queue.
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(std::collections::VecDeque::new()),
            requests: std::sync::Mutex::new(Vec::new()),
            held: std::sync::Mutex::new(Vec::new()),
            deferred: false,
        }
    }

    /// Transport that holds every callback until [`Self::flush`] is called.
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::new()
        }
    }

    pub fn push_response(&self, response: Result<Response>) {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(response);
    }

    /// Queue a 200 response whose body is `body` serialized as JSON.
    pub fn push_json(&self, url: &str, body: &serde_json::Value) {
        self.push_response(Ok(response_with(url, 200, body.to_string().into_bytes())));
    }

    /// Queue a bare status-code response (e.g. 500).
    pub fn push_status(&self, url: &str, status: u16) {
        self.push_response(Ok(response_with(url, status, Vec::new())));
    }

    /// URLs of every request issued so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .len()
    }

    /// Fire all held callbacks (deferred mode), answering from the queue.
    pub fn flush(&self) {
        let held: Vec<_> = self
            .held
            .lock()
            .expect("mock held callbacks poisoned")
            .drain(..)
            .collect();
        for on_done in held {
            on_done(self.next_response());
        }
    }

    /// Number of callbacks currently held (deferred mode).
    pub fn held_count(&self) -> usize {
        self.held.lock().expect("mock held callbacks poisoned").len()
    }

    fn next_response(&self) -> Result<Response> {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Err("MockFetcher: no response queued".to_owned()))
    }
}

#[cfg(test)]
impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl FetchService for MockFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request.url.clone());
        if self.deferred {
            self.held
                .lock()
                .expect("mock held callbacks poisoned")
                .push(on_done);
        } else {
            on_done(self.next_response());
        }
    }
}

/// Build an `ehttp::Response` by hand; ehttp has no constructor for this.
#[cfg(test)]
fn response_with(url: &str, status: u16, bytes: Vec<u8>) -> Response {
    Response {
        url: url.to_owned(),
        ok: (200..300).contains(&status),
        status,
        status_text: String::new(),
        bytes,
        headers: ehttp::Headers::new(&[("content-type", "application/json")]),
    }
}
