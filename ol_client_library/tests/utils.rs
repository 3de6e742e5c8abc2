#![allow(dead_code)]
use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode, Uri},
    routing::post,
    Router,
};
use ol_client_library::InvokeOptions;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[macro_export]
macro_rules! assert_invoke_error {
    ($err:expr, $pat:pat) => {
        match $err {
            Ok(r) => panic!("Expected an invoke error, got result {:?}", r),
            Err(e) => match e.downcast_ref::<ol_client_library::InvokeError>() {
                Some($pat) => (),
                other => panic!("Unexpected error {:?}", other),
            },
        };
    };
}

/// What the worker double saw for one request
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

pub type Requests = Arc<Mutex<Vec<Captured>>>;

/// Behaviour is picked by function name:
/// `json` answers `{"a":1}`, `missing` answers 404, `slow` never answers in time,
/// anything else echoes the request body back with a 200.
async fn handle_invoke(
    Extension(requests): Extension<Requests>,
    Path(func_name): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Vec<u8>) {
    requests.lock().push(Captured {
        path: uri.path().to_string(),
        headers,
        body: body.to_vec(),
    });
    match func_name.as_str() {
        "json" => (StatusCode::OK, br#"{"a":1}"#.to_vec()),
        "missing" => (StatusCode::NOT_FOUND, b"not found".to_vec()),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(10)).await;
            (StatusCode::OK, b"too late".to_vec())
        },
        _ => (StatusCode::OK, body.to_vec()),
    }
}

/// Start an in-process worker on an ephemeral port, returning its base url and the request log
pub async fn spawn_worker() -> (String, Requests) {
    let requests: Requests = Arc::new(Mutex::new(vec![]));
    let app = Router::new()
        .route("/invoke/:func_name", post(handle_invoke))
        .layer(Extension(requests.clone()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    (format!("http://{}", addr), requests)
}

/// A base url nothing is listening on
pub async fn dead_worker() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn options(base_url: &str) -> InvokeOptions {
    InvokeOptions {
        base_url: base_url.to_string(),
        inline_data: None,
        json_file: None,
        binary_file: None,
        headers: vec![],
        timeout_sec: 5,
        pretty: false,
        strict: false,
    }
}
