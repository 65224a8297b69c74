use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use jconf_cli::{JconfOptions, run_main, write_output};

#[derive(Parser, Debug)]
#[command(
    name = "jconf2dot",
    about = "Graph the device/proxy relationships of VR Juggler jconf files as graphviz dot",
    version
)]
pub struct Cli {
    /// jconf files to graph, in order
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    files: Vec<String>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,

    /// Fail when distinct element names sanitize to the same node id
    #[arg(long = "strict-ids", default_value_t = false)]
    strict_ids: bool,

    /// Log progress to stderr at debug level
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        Some(tracing_subscriber::EnvFilter::new("debug"))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(tracing_subscriber::EnvFilter::from_default_env())
    } else {
        None
    };

    if let Some(filter) = filter {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

pub fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();
    init_logging(args.verbose);

    let opts = JconfOptions {
        files: args.files,
        output: args.output,
        strict_ids: args.strict_ids,
    };

    let result = run_main(&opts).and_then(|dot| write_output(opts.output.as_deref(), &dot));

    let total_secs = total_start.elapsed().as_secs_f64();
    match result {
        Ok(()) => {
            tracing::info!(total_secs, "complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = ?e, "execution failed");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    run(Cli::parse())
}
