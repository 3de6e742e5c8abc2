use crate::args::InvokeArgs;
use anyhow::Result;
use ol_client_library::config::Configuration;
use ol_client_library::{InvocationResult, InvokeError, InvokeOptions, RenderedBody};
use ol_library::transaction::TransactionId;
use std::io::Write;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
/// The worker answered with a non-2xx status, could not be reached, or a body file was unreadable
pub const EXIT_FAILURE: u8 = 1;
/// The command line itself was wrong, nothing was sent
pub const EXIT_USAGE: u8 = 2;

pub fn result_exit_code(result: &InvocationResult) -> u8 {
    match result.is_success() {
        true => EXIT_SUCCESS,
        false => EXIT_FAILURE,
    }
}

pub fn error_exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<InvokeError>() {
        Some(e) if e.is_usage_error() => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

pub fn invoke_options(cfg: &Configuration, args: InvokeArgs) -> InvokeOptions {
    InvokeOptions {
        base_url: cfg.url.clone(),
        inline_data: args.data,
        json_file: args.json,
        binary_file: args.file,
        headers: args.headers,
        timeout_sec: cfg.timeout_sec,
        pretty: args.pretty,
        strict: args.strict,
    }
}

pub async fn invoke(cfg: &Configuration, args: InvokeArgs, tid: &TransactionId) -> Result<u8> {
    let name = args.name.clone();
    let options = invoke_options(cfg, args);
    let result = ol_client_library::invoke(&name, &options, tid).await?;
    debug!(tid=tid, status=result.status, duration_ms=result.duration.as_millis() as u64, "Rendering invocation result");

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", RenderedBody::new(&result.body, options.pretty))?;
    out.flush()?;
    Ok(result_exit_code(&result))
}
