//! Secure Password Generator CLI
//!
//! Parses flags, generates passwords, and writes them to stdout.
//! Diagnostics and the entropy line go to stderr.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use spg::{copy_to_clipboard, render, ClipboardError, Error, Generator, SecureRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` directives, when present and valid, take precedence over `-v`.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let (config, output) = cli.resolve()?;
    info!("spg v{}", spg::VERSION);

    let generator = Generator::new(&config)?;
    let mut rng = SecureRng::from_os_entropy()?;
    let passwords = generator.generate_batch(&mut rng)?;

    if output.show_entropy {
        eprintln!("{}", generator.entropy());
    }

    if output.copy {
        if let Some(first) = passwords.first() {
            match copy_to_clipboard(first.as_str()) {
                Ok(_) => {}
                Err(ClipboardError::NoTool) => eprintln!(
                    "Note: No clipboard utility found (expected wl-copy, xclip or pbcopy). Skipping --copy."
                ),
                Err(e) => warn!(error = %e, "Clipboard copy failed"),
            }
        }
    }

    let rendered = render(&passwords, &output)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    info!(
        count = passwords.len(),
        bytes_drawn = rng.bytes_generated(),
        "Done"
    );
    Ok(())
}
