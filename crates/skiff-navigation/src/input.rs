//! Input resolution for the address field
//!
//! Turns whatever the user typed into something the render surface can load.
//! Resolution is pure: no I/O, no state beyond the configured search engine.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use url::Url;

use crate::DEFAULT_SEARCH_TEMPLATE;

/// Result of resolving address field input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Input was blank
    Empty,
    /// Web address, scheme included
    Navigate(String),
    /// Local `file://` reference
    File(String),
    /// Search URL built from the query
    Search(String),
}

impl InputResolution {
    /// The navigable address. `Empty` yields an empty string.
    pub fn into_address(self) -> String {
        match self {
            InputResolution::Empty => String::new(),
            InputResolution::Navigate(url)
            | InputResolution::File(url)
            | InputResolution::Search(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputResolution::Search(_))
    }
}

/// How search queries are embedded in the search template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Query is inserted as typed. Reserved characters and spaces pass through.
    #[default]
    Verbatim,
    /// Query is form-encoded (`hello world` → `hello+world`)
    Percent,
}

#[derive(Debug, Clone)]
pub struct AddressResolver {
    /// Search engine URL template (%s replaced with query, appended when absent)
    search_template: String,
    query_encoding: QueryEncoding,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self::with_search_engine(DEFAULT_SEARCH_TEMPLATE.to_string())
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
            query_encoding: QueryEncoding::Verbatim,
        }
    }

    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    pub fn query_encoding(&self) -> QueryEncoding {
        self.query_encoding
    }

    /// Resolve user input into a navigation target
    pub fn resolve(&self, input: &str) -> InputResolution {
        let input = input.trim();

        if input.is_empty() {
            return InputResolution::Empty;
        }

        if is_web_address(input) {
            if has_http_scheme(input) {
                return InputResolution::Navigate(input.to_string());
            }
            return InputResolution::Navigate(format!("http://{}", input));
        }

        if input.starts_with("file://") {
            return InputResolution::File(input.to_string());
        }

        let search_url = self.build_search_url(input);
        tracing::trace!(query = input, url = %search_url, "Input resolved as search");
        InputResolution::Search(search_url)
    }

    /// Resolve straight to the address string
    pub fn resolve_address(&self, input: &str) -> String {
        self.resolve(input).into_address()
    }

    fn build_search_url(&self, query: &str) -> String {
        let query = match self.query_encoding {
            QueryEncoding::Verbatim => query.to_string(),
            QueryEncoding::Percent => {
                url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
            }
        };

        if self.search_template.contains("%s") {
            self.search_template.replace("%s", &query)
        } else {
            format!("{}{}", self.search_template, query)
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve with the default search engine and verbatim queries
pub fn resolve_address(input: &str) -> String {
    AddressResolver::new().resolve_address(input)
}

fn has_http_scheme(input: &str) -> bool {
    scheme_of(input).is_some_and(|scheme| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

/// Scheme before a leading `scheme://`, if any
fn scheme_of(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Web address grammar: `[http(s)://][user[:pass]@]host[:port][/path][?query][#fragment]`
fn is_web_address(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    // An explicit http(s) scheme only needs to parse with a host
    if has_http_scheme(input) {
        return Url::parse(input).is_ok_and(|url| url.has_host());
    }
    if scheme_of(input).is_some() {
        return false;
    }

    let (authority, _rest) = split_host_and_rest(input);
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) if !userinfo.is_empty() => host_port,
        Some(_) => return false,
        None => authority,
    };

    let host = match host_port.rsplit_once(':') {
        Some((host, port)) => {
            if port.is_empty() || port.len() > 5 || !port.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            host
        }
        None => host_port,
    };

    if !(is_ipv4(host) || is_host_name(host)) {
        return false;
    }

    Url::parse(&format!("http://{}", input)).is_ok()
}

fn is_ipv4(host: &str) -> bool {
    host.parse::<Ipv4Addr>().is_ok()
}

fn is_host_name(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.chars().count() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });

    // Top-level label is alphabetic, at least two characters
    let tld = labels[labels.len() - 1];
    labels_ok && tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)
}

fn split_host_and_rest(input: &str) -> (&str, &str) {
    let cut = input.find(['/', '?', '#']).unwrap_or(input.len());
    input.split_at(cut)
}
