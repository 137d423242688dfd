use serde::Serialize;
use serde_json::json;

use crate::config::ResolvedConfig;
use crate::paging::{NavigationFragments, PaginationState};

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    emit_json(value, pretty)
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

pub fn state_to_json(state: &PaginationState) -> serde_json::Value {
    json!({
        "state": state,
        "hasPrev": state.has_prev(),
        "hasNext": state.has_next(),
        "limitClause": state.limit_clause(),
    })
}

pub fn navigation_to_json(
    state: &PaginationState,
    fragments: &NavigationFragments,
) -> serde_json::Value {
    json!({
        "state": state,
        "navigation": fragments,
    })
}

pub fn config_to_json(resolved: &ResolvedConfig) -> serde_json::Value {
    json!({
        "configPath": resolved.config_path.as_ref().map(|p| p.display().to_string()),
        "profileName": resolved.profile_name,
        "paging": {
            "perPage": resolved.paging.per_page,
            "windowSize": resolved.presentation.window_size,
            "pageParam": resolved.paging.page_param,
        },
        "labels": {
            "total": resolved.presentation.total_label,
            "pages": resolved.presentation.pages_label,
            "first": resolved.presentation.first_label,
            "prev": resolved.presentation.prev_label,
            "next": resolved.presentation.next_label,
            "last": resolved.presentation.last_label,
            "goPageText": resolved.presentation.go_page_label,
            "goPageSize": resolved.presentation.go_page_size,
            "placeholder": resolved.presentation.placeholder,
        },
        "settings": {
            "output": {
                "defaultFormat": resolved.settings.output.default_format.as_str(),
                "json": {
                    "pretty": resolved.settings.output.json.pretty,
                },
            }
        }
    })
}
