//! Binary entrypoint for the `openbmctool` CLI.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Flags fall back to OPENBMC_* variables, which may come from .env.
    let _ = dotenvy::dotenv();

    let result = openbmc::parse_args(std::env::args()).and_then(|cli| match cli {
        Some(cli) => {
            init_tracing(cli.verbose);
            openbmc::commands::dispatch(&cli)
        }
        None => Ok(()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "openbmc=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
