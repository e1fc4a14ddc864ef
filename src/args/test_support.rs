use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{Cli, Command, PerfArgs};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn parse_perf_args<I, T>(args: I) -> AppResult<PerfArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match parse_test_args(args)?.command {
        Some(Command::Perf(perf)) => Ok(perf),
        None => Err(AppError::validation("Expected perf subcommand")),
    }
}
