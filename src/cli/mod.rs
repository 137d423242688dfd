mod args;

pub use args::{
    CliArgs, CommandKind, CompletionsArgs, ComputeArgs, ConfigArgs, InitArgs, LinkArgs, NavArgs,
    OutputFlags, build_cli, try_parse_from,
};

pub fn parse() -> CliArgs {
    args::parse_args()
}
