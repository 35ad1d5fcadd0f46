//! mst-analyzer: TCP server for minimum-spanning-tree analysis.
//!
//! Binds a TCP port, serves line-oriented graph/MST commands to many
//! concurrent clients through a worker pool, and shuts down when the
//! literal line `shutdown` arrives on standard input.

use std::io::BufRead;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use mst_analyzer::config;
use mst_analyzer::net::Server;
use mst_analyzer::pool::PoolMode;

/// TCP server for minimum-spanning-tree analysis.
///
/// Clients connect and issue line-oriented commands to build a graph,
/// pick one of five MST algorithms, and display the tree with derived
/// metrics.
#[derive(Parser, Debug)]
#[command(name = "mst-analyzer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pool discipline: LF (Leader/Followers) or PL (Active-Object)
    #[arg(short, long, value_name = "LF|PL")]
    mode: Option<String>,

    /// Number of worker threads in the pool
    #[arg(short, long, value_name = "N")]
    threads: Option<usize>,

    /// TCP port to listen on
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr; the sockets carry only protocol bytes.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the mst-analyzer server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if args.config.is_none() {
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("\nDefault config location: {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    // CLI values override the config file
    let mode = match &args.mode {
        Some(raw) => match PoolMode::from_str_loose(raw) {
            Some(mode) => mode,
            None => {
                eprintln!("Invalid pool mode '{raw}'. Must be one of: LF, PL");
                return ExitCode::FAILURE;
            }
        },
        None => cfg.pool_mode(),
    };
    let threads = args.threads.unwrap_or(cfg.server.threads);
    if threads == 0 {
        eprintln!("Thread count must be at least 1");
        return ExitCode::FAILURE;
    }
    let port = args.port.unwrap_or(cfg.server.port);
    if port == 0 {
        eprintln!("Port must be non-zero");
        return ExitCode::FAILURE;
    }

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        %mode,
        threads,
        port,
        remove_policy = ?cfg.remove_policy(),
        "Starting mst-analyzer server"
    );

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    let mut server = match Server::start(addr, mode, threads) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Startup error: {e}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "mst-analyzer listening on {} ({} pool, {} threads). \
         Type 'shutdown' to stop.",
        server.local_addr(),
        mode,
        threads
    );

    // The server runs on background threads; the main thread watches
    // stdin for the shutdown line (EOF also stops the server).
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(input) if input.trim() == "shutdown" => {
                info!("shutdown requested on stdin");
                break;
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }

    server.stop();
    info!("Server shut down gracefully");
    ExitCode::SUCCESS
}
