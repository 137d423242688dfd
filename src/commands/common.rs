use anyhow::Result;

use crate::cli::CliArgs;
use crate::config::OutputFormat;
use crate::config::{self, CliOverrides, ResolvedConfig};
use crate::error::{AppError, ErrorKind};
use crate::output;
use crate::paging::{self, PageUrl, PaginationState};

pub fn overrides_from_args(args: &CliArgs) -> CliOverrides {
    CliOverrides {
        config_path: args.config_path.clone(),
        env_file: args.env_file.clone(),
        profile: args.profile.clone(),
        per_page: args.per_page,
        window_size: args.window_size,
    }
}

pub fn load_config(args: &CliArgs) -> Result<ResolvedConfig> {
    load_config_with(&overrides_from_args(args))
}

pub fn load_config_with(overrides: &CliOverrides) -> Result<ResolvedConfig> {
    config::load_from_system(overrides)
        .map_err(|err| AppError::new(ErrorKind::Config, format!("{:#}", err)).into())
}

pub fn output_format(args: &CliArgs, resolved: &ResolvedConfig) -> OutputFormat {
    output::select_format(&args.output, &resolved.settings)
}

pub fn json_pretty(resolved: &ResolvedConfig) -> bool {
    resolved.settings.output.json.pretty
}

/// Run the calculator with the resolved per-page and window settings.
pub fn compute_state(
    resolved: &ResolvedConfig,
    total: i64,
    raw_page: Option<&str>,
) -> Result<PaginationState> {
    let requested = paging::parse_requested_page(raw_page);
    let state = paging::compute(
        total,
        resolved.paging.per_page,
        requested,
        resolved.presentation.window_size,
    )?;
    Ok(state)
}

/// Link builder for `url` using the configured page parameter.
pub fn page_links(resolved: &ResolvedConfig, url: &str) -> Result<PageUrl> {
    PageUrl::with_param(url, &resolved.paging.page_param)
        .map_err(|err| AppError::new(ErrorKind::Config, err.to_string()).into())
}

/// Rows describing a computed state, shared by `compute` and `nav`.
pub fn state_rows(state: &PaginationState) -> Vec<(String, String)> {
    vec![
        ("total".to_string(), state.total.to_string()),
        ("perPage".to_string(), state.per_page.to_string()),
        ("pageCount".to_string(), state.page_count.to_string()),
        ("currentPage".to_string(), state.current_page.to_string()),
        ("offset".to_string(), state.offset.to_string()),
        ("limit".to_string(), state.limit.to_string()),
        (
            "window".to_string(),
            format!("{}-{}", state.window_start, state.window_end),
        ),
        ("limitClause".to_string(), state.limit_clause()),
    ]
}
