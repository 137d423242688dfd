use serde::{Deserialize, Serialize};

use super::calculator::PaginationState;
use super::link::LinkBuilder;
use super::DEFAULT_WINDOW_SIZE;

pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Labels and sizes used when describing the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    pub total_label: String,
    pub pages_label: String,
    pub first_label: String,
    pub prev_label: String,
    pub next_label: String,
    pub last_label: String,
    pub go_page_label: String,
    pub go_page_size: u32,
    pub window_size: i64,
    pub placeholder: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            total_label: "? records".to_string(),
            pages_label: "? pages".to_string(),
            first_label: "First".to_string(),
            prev_label: "Prev".to_string(),
            next_label: "Next".to_string(),
            last_label: "Last".to_string(),
            go_page_label: "Go".to_string(),
            go_page_size: 3,
            window_size: DEFAULT_WINDOW_SIZE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub page: u64,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageItem {
    pub page_number: u64,
    pub link: String,
    pub is_current: bool,
}

/// Data for a "go to page" control; the caller's UI layer renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoToPage {
    pub input_size: u32,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationFragments {
    pub first: Option<NavLink>,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
    pub last: Option<NavLink>,
    pub page_list: Vec<PageItem>,
    pub total_text: String,
    pub pages_text: String,
    pub go_to_page: GoToPage,
}

pub fn present<L>(
    state: &PaginationState,
    config: &PresentationConfig,
    links: &L,
) -> NavigationFragments
where
    L: LinkBuilder + ?Sized,
{
    let nav_link = |page: u64, label: &str| NavLink {
        page,
        href: links.link(page),
        label: label.to_string(),
    };

    let (first, prev) = if state.is_first() {
        (None, None)
    } else {
        (
            Some(nav_link(1, &config.first_label)),
            Some(nav_link(state.current_page - 1, &config.prev_label)),
        )
    };

    let (next, last) = if state.is_last() {
        (None, None)
    } else {
        (
            Some(nav_link(state.current_page + 1, &config.next_label)),
            Some(nav_link(state.page_count, &config.last_label)),
        )
    };

    let page_list = state
        .window()
        .map(|page| PageItem {
            page_number: page,
            link: links.link(page),
            is_current: page == state.current_page,
        })
        .collect();

    NavigationFragments {
        first,
        prev,
        next,
        last,
        page_list,
        total_text: fill_placeholder(&config.total_label, &config.placeholder, state.total),
        pages_text: fill_placeholder(&config.pages_label, &config.placeholder, state.page_count),
        go_to_page: GoToPage {
            input_size: config.go_page_size,
            submit_label: config.go_page_label.clone(),
        },
    }
}

/// Labels without the placeholder come back unchanged.
fn fill_placeholder(label: &str, placeholder: &str, value: u64) -> String {
    if placeholder.is_empty() {
        return label.to_string();
    }
    label.replace(placeholder, &value.to_string())
}
