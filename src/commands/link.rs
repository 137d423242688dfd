use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, LinkArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::json as json_out;
use crate::paging::LinkBuilder;

pub fn run(args: &CliArgs, cmd: &LinkArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let links = common::page_links(&resolved, &cmd.url)?;
    let href = links.link(cmd.page);

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "url": cmd.url,
            "page": cmd.page,
            "param": links.param(),
            "href": href,
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else {
        println!("{}", href);
    }

    Ok(())
}
