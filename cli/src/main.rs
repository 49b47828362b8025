use std::any::Any;
use std::io::{self, Read, Write};
use std::panic;
use std::process::ExitCode;

use api_bridge::cli::Args;
use api_bridge::logging;
use api_bridge::transport::UreqTransport;
use api_bridge_core::{translate, BridgeError, Outcome, ResultDescriptor};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::warn;

fn main() -> ExitCode {
    logging::init();

    let outcome = match panic::catch_unwind(run) {
        Ok(result) => Outcome::from(result),
        Err(payload) => Outcome::from(Err(BridgeError::Unclassified(panic_message(payload)))),
    };
    if let Outcome::Failure(failure) = &outcome {
        warn!(error_type = %failure.error_type, error = %failure.error, "request failed");
    }

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", outcome.to_pretty_json());
    let _ = stdout.flush();

    ExitCode::from(outcome.exit_code() as u8)
}

fn run() -> Result<ResultDescriptor, BridgeError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let first = message.lines().next().unwrap_or("invalid arguments");
            return Err(BridgeError::Config(first.trim_start_matches("error: ").to_string()));
        }
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    translate(&input, &args.into_raw_config(), &UreqTransport::new())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("internal error: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("internal error: {s}")
    } else {
        "internal error".to_string()
    }
}
