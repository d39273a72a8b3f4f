//! Executes core-built requests over real HTTP.

use std::time::Duration;

use taskboard_core::{Exchange, HttpMethod, HttpRequest, HttpResponse, LoadRequests, TransportError};

/// Host side of the host-does-IO split.
pub trait Transport: Sync {
    fn execute(&self, req: HttpRequest) -> Exchange;

    /// Issue both halves of the initial load concurrently and wait for both.
    fn execute_pair(&self, reqs: LoadRequests) -> (Exchange, Exchange) {
        let LoadRequests { users, todos } = reqs;
        std::thread::scope(|s| {
            let pending = s.spawn(|| self.execute(todos));
            let users = self.execute(users);
            let todos = pending
                .join()
                .unwrap_or_else(|_| Err(TransportError::new("request thread panicked")));
            (users, todos)
        })
    }
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `connect_timeout` bounds connection setup only; a slow response is
    /// waited on indefinitely.
    pub fn new(connect_timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(connect_timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Exchange {
        tracing::debug!(method = req.method.as_str(), path = %req.path, "request");
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::new(e.to_string()))?;
        tracing::debug!(status, "response");
        Ok(HttpResponse::new(status, body))
    }
}
