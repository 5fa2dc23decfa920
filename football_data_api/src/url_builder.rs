//! Request URL composition: an endpoint path joined to the API root, plus an
//! ordered, form-encoded query string.

use url::form_urlencoded;

/// Versioned root of the production football-data.org API.
pub const API_ROOT: &str = "https://api.football-data.org/v4/";

/// Ordered query parameters.
///
/// Pairs are emitted in insertion order. Inserting a key that is already
/// present replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Joins endpoint paths onto an API root.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    root: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(API_ROOT)
    }
}

impl UrlBuilder {
    /// Creates a builder for a custom root. Used for testing with wiremock.
    pub fn new(root: &str) -> Self {
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Builds `{root}/{path}`, followed by `/?{query}` when `params` is not empty.
    ///
    /// The path is not checked. A malformed path yields a malformed URL.
    pub fn build(&self, path: &str, params: &Params) -> String {
        let mut url = format!("{}/{}", self.root, path.trim_start_matches('/'));
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            url.push_str("/?");
            url.push_str(&query);
        }
        url
    }
}
