use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::defaults::{DEFAULT_SERVER_URL, default_token_path};
use super::parsers::{parse_bool_env, parse_duration_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Trigger SMPS performance tests on a Meshery server from the command line."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging (sets log level to debug unless overridden by PERFCTL_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, global = true)]
    pub no_color: bool,

    /// Path to config file (TOML or JSON). Defaults to ./perfctl.toml or ./perfctl.json
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Performance Testing & Benchmarking using a Meshery server
    #[command(
        long_about = "Performance Testing & Benchmarking using a Meshery server.\n\n\
url, duration, concurrent-requests, qps, and load-generator may be omitted when they are \
provided by an SMPS-compatible YAML file passed with --file.",
        after_help = "Example:\n  perfctl perf --name \"a quick stress test\" --url http://192.168.1.15/productpage \
--qps 300 --concurrent-requests 2 --duration 30s"
    )]
    Perf(PerfArgs),
}

#[derive(Debug, Args, Clone)]
pub struct PerfArgs {
    /// (required) Endpoint URL to test
    #[arg(long)]
    pub url: Option<String>,

    /// (optional) Name of the test; a random 8 character name is generated when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// (optional) Name of the service mesh under test
    #[arg(long)]
    pub mesh: Option<String>,

    /// (optional) Queries per second, 0 for max throughput [default: 0]
    #[arg(long)]
    pub qps: Option<String>,

    /// (optional) Number of parallel requests [default: 1]
    #[arg(long = "concurrent-requests")]
    pub concurrent_requests: Option<String>,

    /// (optional) Length of the test (e.g. 10s, 5m, 1h30m) [default: 30s]
    #[arg(long)]
    pub duration: Option<String>,

    /// (optional) Path to the Meshery auth token file
    #[arg(long, default_value_t = default_token_path())]
    pub token: String,

    /// (optional) Load generator used by the server (fortio/wrk2) [default: fortio]
    #[arg(long = "load-generator")]
    pub load_generator: Option<String>,

    /// (optional) SMPS-compatible YAML test configuration
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Base URL of the Meshery server
    #[arg(long, env = "MESHERY_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Connection timeout for requests to the server (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Overall timeout for each request to the server (supports ms/s/m/h)
    #[arg(long = "request-timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,
}
