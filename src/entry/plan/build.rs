use std::path::PathBuf;

use clap::ArgMatches;
use rand::thread_rng;

use perfctl::args::{Cli, Command};
use perfctl::error::{AppError, AppResult};
use perfctl::http::Endpoints;
use perfctl::perf::{ResolvedParameters, RunStage, load_spec_overlay};

use super::types::PerfPlan;

pub(crate) fn build_plan(cli: Cli, matches: &ArgMatches) -> AppResult<PerfPlan> {
    let Some(Command::Perf(mut args)) = cli.command else {
        return Err(AppError::Clap {
            source: clap::Error::new(clap::error::ErrorKind::MissingSubcommand),
        });
    };

    if let Some(config) = perfctl::config::load_config(cli.config.as_deref())? {
        let perf_matches = matches.subcommand_matches("perf").unwrap_or(matches);
        perfctl::config::apply_config(&mut args, perf_matches, &config)?;
    }

    let mut stage = RunStage::Idle;
    let spec = load_spec_overlay(&args);
    let resolved = ResolvedParameters::resolve(&args, spec.as_ref(), &mut thread_rng());
    stage.advance(RunStage::ParametersResolved);

    let config = resolved.validate().map_err(|err| stage.fail(err))?;
    let endpoints = Endpoints::from_server(&args.server).map_err(|err| stage.fail(err))?;
    stage.advance(RunStage::Validated);

    tracing::info!(
        "Test '{}': {} for {:?} with {} connection(s) at {} qps using {}",
        config.name,
        config.url,
        config.duration,
        config.concurrent_requests,
        config.qps,
        config.load_generator
    );

    Ok(PerfPlan {
        config,
        endpoints,
        token_path: PathBuf::from(&args.token),
        connect_timeout: args.connect_timeout,
        request_timeout: args.request_timeout,
        stage,
    })
}
