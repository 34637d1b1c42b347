//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

pub(super) fn parse(args: &[&str]) -> Cli {
    try_parse(args).unwrap()
}
