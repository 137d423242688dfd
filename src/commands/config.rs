use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::config;
use crate::output::{self, TableOptions, json, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = output::select_format(&args.output, &resolved.settings);

    if args.quiet {
        return Ok(());
    }

    match format {
        config::OutputFormat::Json => {
            let payload = json::config_to_json(&resolved);
            let body = json::emit_json_value(&payload, resolved.settings.output.json.pretty)?;
            println!("{}", body);
        }
        _ => {
            let labels = &resolved.presentation;
            let rows = vec![
                (
                    "configPath".to_string(),
                    resolved
                        .config_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(none)".to_string()),
                ),
                ("profileName".to_string(), resolved.profile_name.clone()),
                ("perPage".to_string(), resolved.paging.per_page.to_string()),
                ("windowSize".to_string(), labels.window_size.to_string()),
                ("pageParam".to_string(), resolved.paging.page_param.clone()),
                ("total".to_string(), labels.total_label.clone()),
                ("pages".to_string(), labels.pages_label.clone()),
                ("first".to_string(), labels.first_label.clone()),
                ("prev".to_string(), labels.prev_label.clone()),
                ("next".to_string(), labels.next_label.clone()),
                ("last".to_string(), labels.last_label.clone()),
                ("goPageText".to_string(), labels.go_page_label.clone()),
                ("goPageSize".to_string(), labels.go_page_size.to_string()),
                ("placeholder".to_string(), labels.placeholder.clone()),
            ];

            let rendered =
                table::render_key_value_table("Config", &rows, format, &TableOptions::default());
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}
