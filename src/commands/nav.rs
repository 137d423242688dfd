use anyhow::Result;
use tracing::info;

use crate::cli::{CliArgs, NavArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{TableOptions, csv as csv_out, json as json_out, table};
use crate::paging;

const DEFAULT_URL: &str = "/";

pub fn run(args: &CliArgs, cmd: &NavArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let state = common::compute_state(&resolved, cmd.total, cmd.page.as_deref())?;

    let url = cmd.url.as_deref().unwrap_or(DEFAULT_URL);
    let links = common::page_links(&resolved, url)?;
    let fragments = paging::present(&state, &resolved.presentation, &links);

    if let Some(path) = &cmd.csv {
        csv_out::write_page_list(path, &fragments.page_list)?;
        info!("Wrote {} page links to {}", fragments.page_list.len(), path.display());
    }

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json_out::navigation_to_json(&state, &fragments);
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
        return Ok(());
    }

    let options = TableOptions::default();
    println!("{}", table::render_pager_line(&fragments));
    println!(
        "{}",
        table::render_key_value_table(
            "Navigation",
            &table::navigation_rows(&fragments),
            format,
            &options
        )
    );
    println!(
        "{}",
        table::render_page_list_table(&fragments.page_list, format, &options)
    );

    Ok(())
}
