mod clean;
mod dns;
mod error;
mod exec;
mod modules;
mod pipeline;
mod probe;
mod report;
mod screenshot;

pub use error::{Error, Result};

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Results directory, fixed like the tool paths.
pub const OUTPUT_DIR: &str = "SR";

// timeouts
pub const SUBPROCESS_TIMEOUT_MS: u64 = 600_000;

fn main() -> Result<()> {
    let mut cli = Command::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about("Sequence subfinder, findomain, assetfinder, dnsx and httpx against a target domain")
        .arg(
            Arg::new("domain")
                .short('d')
                .long("domain")
                .help("Target domain name")
                .value_name("DOMAIN"),
        )
        .arg(
            Arg::new("clear")
                .long("clear")
                .action(ArgAction::SetTrue)
                .help("Clear all result files"),
        )
        .arg(
            Arg::new("screenshots")
                .long("screenshots")
                .action(ArgAction::SetTrue)
                .help("Capture screenshots and generate an EyeWitness report"),
        )
        .arg(
            Arg::new("logs")
                .short('s')
                .long("logs")
                .action(ArgAction::SetTrue)
                .help("Save logs into a .log file"),
        );

    let args = cli.clone().get_matches();

    // precedence: clear, then domain, else help
    if args.get_flag("clear") {
        init_tracing_subscriber(false, OUTPUT_DIR.as_ref(), "");
        report::clear_output_files(OUTPUT_DIR.as_ref())?;
    } else if let Some(domain) = args.get_one::<String>("domain") {
        // create filename
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let filename = format!("run_{}", timestamp);

        // create output dir
        report::ensure_dir(OUTPUT_DIR.as_ref())?;
        init_tracing_subscriber(args.get_flag("logs"), OUTPUT_DIR.as_ref(), &filename);

        info!("Enumerating {} ({})", domain, filename);
        pipeline::run(domain, args.get_flag("screenshots"))?;
    } else {
        cli.print_help()?;
    }

    Ok(())
}

fn init_tracing_subscriber(save_logs_file: bool, output_dir: &Path, filename: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // base for the subscriber
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::CLOSE);

    if save_logs_file {
        let filename = format!("{}.log", filename);
        let file_appender = RollingFileAppender::new(Rotation::NEVER, output_dir, filename);
        let subscriber = subscriber
            .with_ansi(false)
            .with_file(false)
            .with_target(false)
            .with_writer(file_appender)
            .finish();

        // add log in terminal as an additional layer
        let stdout_layer = layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true)
            .with_file(false)
            .with_target(false);

        // init the subscriber
        tracing::subscriber::set_global_default(subscriber.with(stdout_layer))
            .expect("Unable to set global subscriber");
    } else {
        let subscriber = subscriber
            .with_ansi(true)
            .with_file(false)
            .with_target(false)
            .finish();

        // init the subscriber
        tracing::subscriber::set_global_default(subscriber)
            .expect("Unable to set global subscriber");
    }
}
