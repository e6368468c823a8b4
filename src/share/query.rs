//! Minimal ordered query-string handling
//!
//! Repeated keys keep their order, which the multi-circle form relies on.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// A scheme (`https://`) or an absolute path marks the input as a URL
static URL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://|/)").expect("URL prefix pattern is valid")
});

/// Decoded query parameters in their original order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a bare query (`a=1&b=2`), a `?`-prefixed query or a full URL
    ///
    /// Anything after `#` is ignored. Input is a URL only when it starts with
    /// a scheme or `/`, and a URL without `?` has no parameters. Any other
    /// input is a query in full, so `?` and `://` may appear inside values.
    pub fn parse(input: &str) -> Self {
        let without_fragment = input.split('#').next().unwrap_or("");

        let query = if URL_PREFIX.is_match(without_fragment) {
            without_fragment
                .split_once('?')
                .map_or("", |(_, query)| query)
        } else {
            without_fragment
                .strip_prefix('?')
                .unwrap_or(without_fragment)
        };

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds a query string, appending pairs in call order
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`
    ///
    /// Commas inside the value stay literal so circle tuples remain readable.
    pub fn append(&mut self, key: &str, value: &str) -> &mut Self {
        let value = value
            .split(',')
            .map(|part| urlencoding::encode(part))
            .collect::<Vec<_>>()
            .join(",");
        self.parts
            .push(format!("{}={}", urlencoding::encode(key), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn finish(&self) -> String {
        self.parts.join("&")
    }
}

/// Attach `query` to `base_url`, replacing any query it already carries
///
/// A fragment on the base URL is kept at the end.
pub fn with_query(base_url: &str, query: &str) -> String {
    let (without_fragment, fragment) = match base_url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (base_url, None),
    };
    let path = without_fragment
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(without_fragment);

    let mut url = format!("{}?{}", path, query);
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Percent-decode a key or value, treating `+` as a space
fn decode_component(raw: &str) -> String {
    let spaced: Cow<str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.to_string(),
    }
}
