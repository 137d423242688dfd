use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde_json::json;

use crate::cli::{CliArgs, InitArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::json as json_out;

pub fn run(args: &CliArgs, cmd: &InitArgs) -> Result<()> {
    // `--profile` names the profile to write, so it need not exist yet.
    let mut overrides = common::overrides_from_args(args);
    overrides.profile = None;
    let resolved = common::load_config_with(&overrides)?;
    let format = common::output_format(args, &resolved);

    let profile_name = args.profile.as_deref().unwrap_or("default");
    let target = resolve_target_path(cmd.path.as_ref());

    if target.exists() && !cmd.force {
        return Err(anyhow!("Config already exists: {}", target.display()));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let template = render_config_template(profile_name);
    fs::write(&target, template)?;

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "path": target.display().to_string(),
            "created": true,
            "overwritten": cmd.force,
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else {
        println!("Wrote config to {}", target.display());
    }

    Ok(())
}

fn resolve_target_path(path: Option<&PathBuf>) -> PathBuf {
    match path {
        Some(path)
            if path
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| matches!(ext, "yaml" | "yml" | "json")) =>
        {
            path.clone()
        }
        Some(path) => path.join(".pagenav").join("config.yaml"),
        None => Path::new(".pagenav").join("config.yaml"),
    }
}

fn render_config_template(profile: &str) -> String {
    let zh_profile = if profile == "zh" { "" } else { ZH_PROFILE };
    format!(
        r#"# pagenav configuration
# Precedence: settings < selected profile < PAGENAV_* env < command-line flags.

defaultProfile: {profile}
settings:
  paging:
    # Records per page.
    perPage: 5
    # Maximum number of page links in the window.
    windowSize: 9
    # Query parameter rewritten in page links.
    pageParam: page
  labels:
    # "?" is replaced by the number.
    total: "? records"
    pages: "? pages"
    first: First
    prev: Prev
    next: Next
    last: Last
    goPageText: Go
    goPageSize: 3
    placeholder: "?"
  output:
    # Values: pretty | markdown | json
    defaultFormat: pretty
    json:
      pretty: true

profiles:
  {profile}:
    paging:
      perPage: 5
{zh_profile}"#
    )
}

const ZH_PROFILE: &str = r#"  zh:
    labels:
      total: "共?条记录"
      pages: "共?页"
      first: 首页
      prev: 上一页
      next: 下一页
      last: 末页
      goPageText: Go
"#;
