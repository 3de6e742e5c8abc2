use crate::error::InvokeError;
use ol_library::transaction::TransactionId;
use ol_library::utils::{calculate_invoke_uri, file_utils::read_bytes};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const BINARY_CONTENT_TYPE: &str = "application/octet-stream";
/// Body sent when the caller supplies nothing
pub const EMPTY_BODY: &[u8] = b"{}";

/// Everything the caller can say about one invocation
#[derive(Debug, Clone)]
pub struct InvokeOptions {
    pub base_url: String,
    /// Sent verbatim as a JSON body
    pub inline_data: Option<String>,
    /// File sent as-is with a JSON content type
    pub json_file: Option<PathBuf>,
    /// File sent as-is with a binary content type
    pub binary_file: Option<PathBuf>,
    /// `Key: Value` entries, applied in order on top of the defaults
    pub headers: Vec<String>,
    pub timeout_sec: u64,
    pub pretty: bool,
    /// Refuse to pick between several body sources instead of using the highest priority one
    pub strict: bool,
}

/// Where the request body comes from.
/// Ordered by priority, a binary file beats a JSON file beats inline data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    Binary(PathBuf),
    Json(PathBuf),
    Inline(String),
    Empty,
}

impl BodySource {
    /// Choose the body source out of the options.
    /// Lower priority sources that were also given are dropped with a warning, or rejected in strict mode.
    pub fn select(options: &InvokeOptions, tid: &TransactionId) -> Result<Self, InvokeError> {
        let mut given = vec![];
        if let Some(pth) = &options.binary_file {
            given.push(BodySource::Binary(pth.clone()));
        }
        if let Some(pth) = &options.json_file {
            given.push(BodySource::Json(pth.clone()));
        }
        if let Some(data) = &options.inline_data {
            given.push(BodySource::Inline(data.clone()));
        }
        let mut given = given.into_iter();
        let chosen = match given.next() {
            Some(src) => src,
            None => return Ok(BodySource::Empty),
        };
        let ignored = given.map(|src| src.flag()).collect::<Vec<_>>();
        if !ignored.is_empty() {
            let ignored = ignored.join(", ");
            if options.strict {
                return Err(InvokeError::ConflictingBodySource {
                    used: chosen.flag(),
                    ignored,
                });
            }
            warn!(tid=tid, used=chosen.flag(), ignored=%ignored, "Multiple body sources given, using the highest priority one");
        }
        Ok(chosen)
    }

    /// The command line flag this source comes from
    pub fn flag(&self) -> &'static str {
        match self {
            BodySource::Binary(_) => "--file",
            BodySource::Json(_) => "--json",
            BodySource::Inline(_) => "--data",
            BodySource::Empty => "none",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            BodySource::Binary(_) => BINARY_CONTENT_TYPE,
            _ => JSON_CONTENT_TYPE,
        }
    }

    /// Produce the bytes to send. Files are read completely, without any decoding.
    pub fn load(&self, tid: &TransactionId) -> Result<Vec<u8>, InvokeError> {
        match self {
            BodySource::Binary(pth) | BodySource::Json(pth) => {
                read_bytes(pth, tid).map_err(|source| InvokeError::BodyFile {
                    path: pth.clone(),
                    source,
                })
            },
            BodySource::Inline(data) => Ok(data.as_bytes().to_vec()),
            BodySource::Empty => Ok(EMPTY_BODY.to_vec()),
        }
    }
}

/// Split a `Key: Value` entry on its first colon
pub fn parse_header(entry: &str) -> Result<(HeaderName, HeaderValue), InvokeError> {
    let malformed = || InvokeError::MalformedHeader(entry.to_string());
    let (key, value) = entry.split_once(':').ok_or_else(malformed)?;
    let name = HeaderName::from_bytes(key.trim().as_bytes()).map_err(|_| malformed())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|_| malformed())?;
    Ok((name, value))
}

/// A fully assembled request, ready to be sent once
#[derive(Debug)]
pub struct InvocationRequest {
    pub target_url: String,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
    pub timeout: Duration,
}

impl InvocationRequest {
    pub fn build(function_name: &str, options: &InvokeOptions, tid: &TransactionId) -> Result<Self, InvokeError> {
        let target_url = calculate_invoke_uri(&options.base_url, function_name);

        let source = BodySource::select(options, tid)?;
        let body = source.load(tid)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(source.content_type()));
        for entry in &options.headers {
            let (name, value) = parse_header(entry)?;
            headers.insert(name, value);
        }

        debug!(tid=tid, url=%target_url, source=source.flag(), size=body.len(), headers=?headers, "Built invocation request");
        Ok(Self {
            target_url,
            body,
            headers,
            timeout: Duration::from_secs(options.timeout_sec),
        })
    }
}
