mod common;
mod completions;
mod compute;
mod config;
mod help;
mod init;
mod link;
mod nav;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Help { all, command } => help::run(*all, command.as_deref()),
        CommandKind::Compute(cmd) => compute::run(args, cmd),
        CommandKind::Nav(cmd) => nav::run(args, cmd),
        CommandKind::Link(cmd) => link::run(args, cmd),
        CommandKind::Init(cmd) => init::run(args, cmd),
        CommandKind::Config(_) => config::run(args),
        CommandKind::Completions(cmd) => completions::run(args, cmd),
    }
}
