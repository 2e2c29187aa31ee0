//! devsnap - one-shot device attribute snapshot.
//!
//! Collects a single snapshot of host device attributes and prints it as a
//! JSON object on stdout. A probe that fails on the running host degrades to
//! documented fallback values; the output schema is always complete.
//!
//! Usage:
//!   devsnap                  # compact JSON on stdout
//!   devsnap --pretty         # indented JSON
//!   devsnap --data-path /srv # report storage for a specific volume
//!   devsnap -v               # debug logging on stderr

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use devsnap::collector::DeviceCollector;
#[cfg(not(target_os = "linux"))]
use devsnap::collector::MockFs;
#[cfg(target_os = "linux")]
use devsnap::collector::RealFs;

/// One-shot device attribute snapshot as JSON.
#[derive(Parser)]
#[command(name = "devsnap", about = "Device attribute snapshot")]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Path to the proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Path to the sys filesystem.
    #[arg(long, default_value = "/sys")]
    sys_path: String,

    /// Volume path reported by the storage fields.
    #[arg(long, default_value = "/")]
    data_path: String,

    /// Version string reported for the embedding application.
    /// Defaults to this binary's own version.
    #[arg(long, value_name = "VERSION")]
    app_version: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode: log errors only.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to stderr so stdout stays a clean JSON document.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("devsnap={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = MockFs::typical_device();

    let app_version = args
        .app_version
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    let collector = DeviceCollector::new(fs)
        .with_proc_path(args.proc_path)
        .with_sys_path(args.sys_path)
        .with_data_path(args.data_path)
        .with_app_version(app_version);

    println!("{}", collector.collect_json(args.pretty));
}
