use anyhow::Result;

use crate::cli::{CliArgs, ComputeArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{TableOptions, json as json_out, table};

pub fn run(args: &CliArgs, cmd: &ComputeArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let state = common::compute_state(&resolved, cmd.total, cmd.page.as_deref())?;

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json_out::state_to_json(&state);
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
        return Ok(());
    }

    let rows = common::state_rows(&state);
    let rendered = table::render_key_value_table("Pagination", &rows, format, &TableOptions::default());
    println!("{}", rendered);

    Ok(())
}
