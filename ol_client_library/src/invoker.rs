use crate::request::{InvocationRequest, InvokeOptions};
use anyhow::Result;
use ol_library::bail_error;
use ol_library::transaction::TransactionId;
use reqwest::Client;
use std::error::Error as _;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Status reported when no HTTP response could be obtained at all
pub const TRANSPORT_FAILURE_STATUS: u16 = 599;

/// Outcome of one invocation, either from the worker or synthesized after a transport failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub status: u16,
    pub body: String,
    pub duration: Duration,
}

impl InvocationResult {
    pub fn transport_failure(description: String, duration: Duration) -> Self {
        Self {
            status: TRANSPORT_FAILURE_STATUS,
            body: description,
            duration,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Render an error with its whole cause chain, `outer: inner: root`
fn describe(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}

#[derive(Debug)]
pub struct Invoker {
    client: Client,
}

impl Invoker {
    pub fn new(tid: &TransactionId) -> Result<Self> {
        let client = match Client::builder().pool_max_idle_per_host(0).build() {
            Ok(c) => c,
            Err(e) => bail_error!(tid=tid, error=%e, "Unable to build reqwest HTTP client"),
        };
        Ok(Self { client })
    }

    /// Send the request exactly once.
    /// Anything that prevents a full response from arriving becomes a [TRANSPORT_FAILURE_STATUS] result.
    #[tracing::instrument(skip(self, request), fields(tid=tid, url=%request.target_url), name="Invoker::invoke")]
    pub async fn invoke(&self, request: InvocationRequest, tid: &TransactionId) -> InvocationResult {
        let builder = self
            .client
            .post(&request.target_url)
            .headers(request.headers)
            .body(request.body)
            .timeout(request.timeout);
        let start = Instant::now();
        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                let description = describe(&e);
                debug!(tid=tid, timeout=e.is_timeout(), connect=e.is_connect(), error=%description, "HTTP error when trying to reach the worker");
                return InvocationResult::transport_failure(description, start.elapsed());
            },
        };
        let status = response.status();
        let body = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                let description = describe(&e);
                debug!(tid=tid, status=status.as_u16(), error=%description, "Error reading response body from the worker");
                return InvocationResult::transport_failure(description, start.elapsed());
            },
        };
        let duration = start.elapsed();
        info!(tid=tid, status=status.as_u16(), duration_ms=duration.as_millis() as u64, size=body.len(), "Invocation complete");
        InvocationResult {
            status: status.as_u16(),
            body,
            duration,
        }
    }
}

/// Build, send, and collect one invocation of `function_name`
pub async fn invoke(function_name: &str, options: &InvokeOptions, tid: &TransactionId) -> Result<InvocationResult> {
    let request = InvocationRequest::build(function_name, options, tid)?;
    let invoker = Invoker::new(tid)?;
    Ok(invoker.invoke(request, tid).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(300, false)]
    #[case(404, false)]
    #[case(500, false)]
    #[case(TRANSPORT_FAILURE_STATUS, false)]
    fn success_range(#[case] status: u16, #[case] success: bool) {
        let res = InvocationResult {
            status,
            body: String::new(),
            duration: Duration::ZERO,
        };
        assert_eq!(res.is_success(), success);
    }

    #[test]
    fn transport_failure_keeps_description() {
        let res = InvocationResult::transport_failure("connection refused".to_string(), Duration::from_millis(3));
        assert_eq!(res.status, 599);
        assert_eq!(res.body, "connection refused");
        assert!(!res.is_success());
    }
}
