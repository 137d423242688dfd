use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use pagenav::cli::{self, CliArgs};
use pagenav::commands;
use pagenav::error;
use pagenav::output::json;

fn main() {
    let args = cli::parse();
    init_logging(args.verbose);

    if let Err(err) = commands::dispatch(&args) {
        report_error(&args, &err);
        std::process::exit(1);
    }
}

fn report_error(args: &CliArgs, err: &anyhow::Error) {
    let message = format!("{:#}", err);
    tracing::debug!(error = ?err, "command failed");
    if args.output.json {
        let kind = error::classify_error(err);
        let payload = json::error_json(&message, kind.as_str());
        if let Ok(body) = json::emit_json_value(&payload, true) {
            let _ = writeln!(io::stderr(), "{}", body);
        }
    } else {
        print_error(&message);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_error(message: &str) {
    if should_color_stderr() {
        let line = format!("Error: {}", message);
        let _ = writeln!(io::stderr(), "{}", line.red());
    } else {
        let _ = writeln!(io::stderr(), "Error: {}", message);
    }
}

fn should_color_stderr() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stderr().is_terminal()
}
