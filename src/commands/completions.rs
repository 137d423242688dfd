use std::io;

use anyhow::{Result, anyhow};
use clap_complete::{Shell, generate};

use crate::cli::{CliArgs, CompletionsArgs, build_cli};

pub fn run(_args: &CliArgs, cmd: &CompletionsArgs) -> Result<()> {
    let shell_name = cmd
        .shell
        .as_deref()
        .ok_or_else(|| anyhow!("--shell is required"))?;

    let shell = shell_name
        .parse::<Shell>()
        .map_err(|_| anyhow!("Unsupported shell: {}", shell_name))?;

    let mut cli = build_cli(true);
    let bin_name = cli.get_name().to_string();
    generate(shell, &mut cli, bin_name, &mut io::stdout());
    Ok(())
}
