use comfy_table::{ContentArrangement, Table, presets};

use crate::config::OutputFormat;
use crate::paging::{NavLink, NavigationFragments, PageItem};

const NONE_DISPLAY: &str = "—";
const ELLIPSIS: &str = "…";
const CURRENT_MARKER: &str = "*";
const DEFAULT_MAX_CELL_WIDTH: usize = 140;
const DEFAULT_MAX_OUTPUT_CHARS: usize = 25_000;

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub max_cell_width: usize,
    pub max_output_chars: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
        }
    }
}

fn new_table(format: OutputFormat) -> Table {
    let mut table = Table::new();
    match format {
        OutputFormat::Markdown => {
            table.load_preset(presets::ASCII_MARKDOWN);
        }
        _ => {
            table.load_preset(presets::UTF8_FULL);
        }
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn render_key_value_table(
    title: &str,
    rows: &[(String, String)],
    format: OutputFormat,
    options: &TableOptions,
) -> String {
    let mut table = new_table(format);
    table.set_header(vec![title.to_string(), "Value".to_string()]);

    for (key, value) in rows {
        let key = truncate_string(key, options.max_cell_width);
        let value = truncate_string(value, options.max_cell_width);
        table.add_row(vec![key, value]);
    }

    truncate_output(table.to_string(), options.max_output_chars)
}

pub fn render_page_list_table(
    items: &[PageItem],
    format: OutputFormat,
    options: &TableOptions,
) -> String {
    let mut table = new_table(format);
    table.set_header(vec!["Page", "Current", "Link"]);

    for item in items {
        let current = if item.is_current { CURRENT_MARKER } else { "" };
        table.add_row(vec![
            item.page_number.to_string(),
            current.to_string(),
            truncate_string(&item.link, options.max_cell_width),
        ]);
    }

    truncate_output(table.to_string(), options.max_output_chars)
}

/// Rows for the first/prev/next/last links and the text fragments.
pub fn navigation_rows(fragments: &NavigationFragments) -> Vec<(String, String)> {
    vec![
        ("first".to_string(), format_link(fragments.first.as_ref())),
        ("prev".to_string(), format_link(fragments.prev.as_ref())),
        ("next".to_string(), format_link(fragments.next.as_ref())),
        ("last".to_string(), format_link(fragments.last.as_ref())),
        ("total".to_string(), fragments.total_text.clone()),
        ("pages".to_string(), fragments.pages_text.clone()),
        (
            "goToPage".to_string(),
            format!(
                "[{}] size {}",
                fragments.go_to_page.submit_label, fragments.go_to_page.input_size
            ),
        ),
    ]
}

/// One-line pager, e.g. `« 1 2 [3] 4 5 »`.
pub fn render_pager_line(fragments: &NavigationFragments) -> String {
    let mut parts = Vec::new();
    if fragments.prev.is_some() {
        parts.push("«".to_string());
    }
    for item in &fragments.page_list {
        if item.is_current {
            parts.push(format!("[{}]", item.page_number));
        } else {
            parts.push(item.page_number.to_string());
        }
    }
    if fragments.next.is_some() {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

fn format_link(link: Option<&NavLink>) -> String {
    match link {
        Some(link) => format!("{} ({}) {}", link.label, link.page, link.href),
        None => NONE_DISPLAY.to_string(),
    }
}

fn truncate_string(input: &str, max_len: usize) -> String {
    let len = input.chars().count();
    if len <= max_len {
        return input.to_string();
    }
    if max_len <= 1 {
        return ELLIPSIS.to_string();
    }
    let truncated: String = input.chars().take(max_len - 1).collect();
    format!("{}{}", truncated, ELLIPSIS)
}

fn truncate_output(output: String, max_len: usize) -> String {
    if output.len() <= max_len {
        return output;
    }
    let mut truncated = output.chars().take(max_len).collect::<String>();
    truncated.push_str("\n[output truncated]");
    truncated
}
