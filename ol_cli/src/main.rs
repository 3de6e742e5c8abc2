pub mod args;
pub mod commands;

use args::{Args, Commands};
use clap::Parser;
use ol_client_library::config::{env_snapshot, Configuration};
use ol_library::logging::start_tracing;
use ol_library::transaction::gen_tid;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Args::try_parse() {
        Ok(arg) => arg,
        Err(e) => e.exit(),
    };
    let tid = gen_tid();

    let cfg = match Configuration::new(cli.config.as_deref(), env_snapshot(std::env::vars_os())) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(commands::EXIT_USAGE);
        },
    };
    let cfg = match &cli.command {
        Commands::Invoke(args) => cfg.with_flags(args.url.clone(), args.timeout, cli.log_level.clone()),
    };
    let _drops = match start_tracing(&cfg.logging, &tid) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: failed to start logging: {:#}", e);
            return ExitCode::from(commands::EXIT_USAGE);
        },
    };

    let code = match cli.command {
        Commands::Invoke(args) => commands::invoke(&cfg, args, &tid).await,
    };
    match code {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            debug!(tid=%tid, error=%e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(commands::error_exit_code(&e))
        },
    }
}
