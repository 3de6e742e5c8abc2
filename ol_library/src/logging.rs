use crate::transaction::TransactionId;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

#[derive(Debug, serde::Deserialize, Clone)]
/// Details about how to log.
/// All log output goes to stderr, stdout is reserved for command results.
pub struct LoggingConfig {
    /// the min log level
    /// see [tracing_subscriber::filter::Builder::parse()]
    pub level: String,
    /// How to log spans, in all caps
    /// look at for details [mod@tracing_subscriber::fmt::format]
    /// Multiple options can be passed by listing them as a list using '+' between values.
    #[serde(default)]
    pub spanning: String,
    /// Format log lines as JSON instead of the compact text format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            spanning: "NONE".to_string(),
            json: false,
        }
    }
}

fn parse_span(span: &str) -> Result<FmtSpan> {
    Ok(match span {
        "NEW" => FmtSpan::NEW,
        "ENTER" => FmtSpan::ENTER,
        "EXIT" => FmtSpan::EXIT,
        "CLOSE" => FmtSpan::CLOSE,
        "NONE" => FmtSpan::NONE,
        "" => FmtSpan::NONE,
        "ACTIVE" => FmtSpan::ACTIVE,
        "FULL" => FmtSpan::FULL,
        _ => anyhow::bail!("Unknown spanning value {}", span),
    })
}

fn str_to_span(spanning: &str) -> Result<FmtSpan> {
    spanning
        .split('+')
        .map(|span| parse_span(span.trim()))
        .try_fold(FmtSpan::NONE, |acc, item| Ok(acc | item?))
}

/// Install the global tracing subscriber.
/// The returned value flushes buffered log lines when dropped and must be held until exit.
pub fn start_tracing(config: &LoggingConfig, tid: &TransactionId) -> Result<impl Drop> {
    #[allow(dyn_drop)]
    let mut drops: Vec<Box<dyn Drop>> = vec![];

    let spans = str_to_span(&config.spanning)?;
    let (stderr, guard) = tracing_appender::non_blocking(std::io::stderr());
    drops.push(Box::new(guard));

    let json_layer = match config.json {
        true => Some(
            tracing_subscriber::fmt::Layer::default()
                .with_span_events(spans.clone())
                .with_writer(stderr.clone())
                .json(),
        ),
        false => None,
    };
    let compact_layer = match config.json {
        true => None,
        false => Some(
            tracing_subscriber::fmt::Layer::default()
                .with_span_events(spans)
                .with_writer(stderr)
                .with_ansi(false)
                .compact(),
        ),
    };

    let subscriber = Registry::default()
        .with(EnvFilter::builder().parse(&config.level)?)
        .with(json_layer)
        .with(compact_layer);
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!(tid=%tid, level=%config.level, "Logger initialized");
            Ok(drops)
        },
        Err(e) => {
            warn!(tid=%tid, error=%e, "Global tracing subscriber was already set");
            Ok(drops)
        },
    }
}
