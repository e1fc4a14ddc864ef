mod plan;

use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use perfctl::args::Cli;
use perfctl::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (cli, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::system::logger::init_logging(cli.verbose, cli.no_color);

    let plan = build_plan(cli, &matches)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<Option<(Cli, ArgMatches)>> {
    let mut cmd = Cli::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    let matches = cmd.clone().get_matches_from(raw_args);
    if matches.subcommand_name().is_none() {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }
    let cli = Cli::from_arg_matches(&matches)?;

    Ok(Some((cli, matches)))
}
