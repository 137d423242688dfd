use regex::Regex;

use super::PagingError;

pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Builds the URL that navigates to a page number.
pub trait LinkBuilder {
    fn link(&self, page: u64) -> String;
}

impl<F> LinkBuilder for F
where
    F: Fn(u64) -> String,
{
    fn link(&self, page: u64) -> String {
        self(page)
    }
}

/// Rewrites one request URL's page parameter, leaving every other query
/// parameter and the fragment as they were.
#[derive(Debug, Clone)]
pub struct PageUrl {
    base: String,
    query: Option<String>,
    fragment: Option<String>,
    param: String,
    pattern: Regex,
}

impl PageUrl {
    pub fn new(url: &str) -> Self {
        Self::build(url, DEFAULT_PAGE_PARAM)
    }

    pub fn with_param(url: &str, param: &str) -> Result<Self, PagingError> {
        let param = param.trim();
        if param.is_empty() {
            return Err(PagingError::invalid("pageParam", "must not be empty"));
        }
        Ok(Self::build(url, param))
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    fn build(url: &str, param: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };
        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base.to_string(), Some(query.to_string())),
            None => (rest.to_string(), None),
        };
        Self {
            base,
            query,
            fragment,
            param: param.to_string(),
            pattern: param_pattern(param),
        }
    }

    /// Sets the first occurrence of the parameter and drops any repeats.
    fn replace_param(&self, query: &str, pair: &str) -> String {
        let mut replaced = false;
        let mut parts = Vec::new();
        for part in query.split('&') {
            if !self.pattern.is_match(part) {
                parts.push(part);
            } else if !replaced {
                parts.push(pair);
                replaced = true;
            }
        }
        parts.join("&")
    }
}

impl LinkBuilder for PageUrl {
    fn link(&self, page: u64) -> String {
        let pair = format!("{}={}", self.param, page);
        let query = match self.query.as_deref() {
            None | Some("") => pair,
            Some(query) if query.split('&').any(|p| self.pattern.is_match(p)) => {
                self.replace_param(query, &pair)
            }
            Some(query) if query.ends_with('&') => format!("{}{}", query, pair),
            Some(query) => format!("{}&{}", query, pair),
        };

        let mut url = format!("{}?{}", self.base, query);
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

fn param_pattern(param: &str) -> Regex {
    // Escaped input always forms a valid pattern.
    Regex::new(&format!(r"^{}(?:=.*)?$", regex::escape(param)))
        .expect("valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_query_when_absent() {
        let url = PageUrl::new("http://example.com:80/list");
        assert_eq!(url.link(3), "http://example.com:80/list?page=3");
    }

    #[test]
    fn appends_param_to_existing_query() {
        let url = PageUrl::new("/list?sort=name&dir=asc");
        assert_eq!(url.link(2), "/list?sort=name&dir=asc&page=2");
    }

    #[test]
    fn replaces_existing_param_in_place() {
        let url = PageUrl::new("/list?sort=name&page=7&dir=asc");
        assert_eq!(url.link(1), "/list?sort=name&page=1&dir=asc");

        let url = PageUrl::new("/list?page=&q=x");
        assert_eq!(url.link(4), "/list?page=4&q=x");
    }

    #[test]
    fn drops_repeated_params() {
        let url = PageUrl::new("/list?page=1&q=a&page=2");
        assert_eq!(url.link(5), "/list?page=5&q=a");

        let url = PageUrl::new("/list?q=a&page&page=3#top");
        assert_eq!(url.link(2), "/list?q=a&page=2#top");
    }

    #[test]
    fn replaces_bare_key() {
        let url = PageUrl::new("/list?q=rust&page");
        assert_eq!(url.link(5), "/list?q=rust&page=5");
    }

    #[test]
    fn leaves_similar_names_alone() {
        let url = PageUrl::new("/list?subpage=2&pages=9");
        assert_eq!(url.link(3), "/list?subpage=2&pages=9&page=3");
    }

    #[test]
    fn keeps_fragment_after_query() {
        let url = PageUrl::new("/list?q=a#results");
        assert_eq!(url.link(2), "/list?q=a&page=2#results");

        let url = PageUrl::new("/list#top");
        assert_eq!(url.link(2), "/list?page=2#top");
    }

    #[test]
    fn handles_empty_and_trailing_queries() {
        assert_eq!(PageUrl::new("/list?").link(2), "/list?page=2");
        assert_eq!(PageUrl::new("/list?q=a&").link(2), "/list?q=a&page=2");
    }

    #[test]
    fn custom_param_name() {
        let url = PageUrl::with_param("/list?p=3", "p").expect("param");
        assert_eq!(url.param(), "p");
        assert_eq!(url.link(8), "/list?p=8");
        assert!(PageUrl::with_param("/list", "  ").is_err());
    }

    #[test]
    fn closures_are_link_builders() {
        let builder = |page: u64| format!("#/page/{}", page);
        assert_eq!(builder.link(4), "#/page/4");
    }
}
