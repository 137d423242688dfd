//! Pagination core: page arithmetic, window selection, link rewriting and
//! navigation fragments. Nothing in here performs I/O.

mod calculator;
mod link;
mod presenter;

use std::fmt;

pub use calculator::{PaginationState, compute, parse_requested_page};
pub use link::{DEFAULT_PAGE_PARAM, LinkBuilder, PageUrl};
pub use presenter::{
    DEFAULT_PLACEHOLDER, GoToPage, NavLink, NavigationFragments, PageItem, PresentationConfig,
    present,
};

pub const DEFAULT_PER_PAGE: i64 = 5;
pub const DEFAULT_WINDOW_SIZE: i64 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    InvalidConfiguration { field: &'static str, message: String },
}

impl PagingError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        PagingError::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::InvalidConfiguration { field, message } => {
                write!(f, "Invalid configuration: {} {}", field, message)
            }
        }
    }
}

impl std::error::Error for PagingError {}
