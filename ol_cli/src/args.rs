use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InvokeArgs {
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    /// Name of function to invoke
    pub name: String,
    #[arg(long)]
    /// Request body, sent verbatim as JSON
    pub data: Option<String>,
    #[arg(long, value_name = "PATH")]
    /// File whose contents are sent as a JSON body
    pub json: Option<PathBuf>,
    #[arg(long, value_name = "PATH")]
    /// File whose contents are sent as a binary body, takes priority over --json and --data
    pub file: Option<PathBuf>,
    #[arg(short = 'H', long = "header", value_name = "KEY: VALUE")]
    /// Extra request header, can be repeated
    pub headers: Vec<String>,
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    /// Seconds to wait for the complete response [default: 15]
    pub timeout: Option<u64>,
    #[arg(long)]
    /// Indent JSON responses
    pub pretty: bool,
    #[arg(long)]
    /// Base address of the worker [env: OL_URL] [default: http://127.0.0.1:5000]
    pub url: Option<String>,
    #[arg(long)]
    /// Fail instead of picking one when several of --file, --json, and --data are given
    pub strict: bool,
}

#[derive(Parser, Debug)]
#[command(name = "ol", author, version, about = "OpenLambda helper CLI", long_about = None)]
pub struct Args {
    #[arg(long, global = true, value_name = "PATH")]
    /// JSON configuration file, `OL_*` environment variables take priority over it
    pub config: Option<String>,
    #[arg(long, global = true, value_name = "FILTER")]
    /// Log filter for stderr output, e.g. `info` or `ol_client_library=debug`
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke a function
    Invoke(InvokeArgs),
}
