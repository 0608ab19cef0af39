//! cookie-filter - trim Netscape `cookies.txt` files to an allow-list
//!
//! # Usage
//!
//! ```bash
//! cookie-filter cookies.txt                          # Overwrite in place, default domains
//! cookie-filter cookies.txt --out yt-cookies.txt     # Write to a new file
//! cookie-filter cookies.txt --domains vimeo.com,vimeocdn.com
//! cookie-filter cookies.txt --dry-run                # Show dropped lines, write nothing
//! cookie-filter cookies.txt --json                   # Machine-readable summary
//! ```
//!
//! # Exit codes
//!
//! - `0`: success
//! - `1`: I/O or configuration failure
//! - `2`: input file not found

use clap::Parser;
use cookie_filter::core::filter::ensure_input_exists;
use cookie_filter::{FilterJob, config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "cookie-filter", version, long_version = build::CLAP_LONG_VERSION)]
#[command(about = "Filter Netscape cookies.txt by domains", long_about = None)]
struct Cli {
    /// Input cookies file (Netscape format)
    infile: PathBuf,

    /// Output file (defaults to overwriting infile atomically)
    #[arg(long, value_name = "OUTFILE")]
    out: Option<PathBuf>,

    /// Comma-separated domains to keep
    /// [default: youtube.com,youtube-nocookie.com,googlevideo.com,google.com]
    #[arg(long, value_name = "CSV")]
    domains: Option<String>,

    /// JSON config file providing a default allow-list
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the lines that would be dropped without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout carries the summary; logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> cookie_filter::Result<()> {
    // A missing input wins over any configuration problem
    ensure_input_exists(&cli.infile)?;

    let config = config::load_config(cli.config.as_deref())?;
    let allow_list = config::resolve_allow_list(cli.domains.as_deref(), &config);

    let mut job = FilterJob::new(cli.infile, allow_list).with_dry_run(cli.dry_run);
    if let Some(out) = cli.out {
        job = job.with_output(out);
    }

    let report = job.run()?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        if let Some(diff) = &report.diff {
            print!("{diff}");
        }
        println!("{}", report.summary_line());
    }
    Ok(())
}
