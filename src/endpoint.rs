/// A base URL plus a path suffix, joined by plain concatenation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget {
    pub base_url: String,
    pub path: String,
}

impl EndpointTarget {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// The service root (`GET /`)
    pub fn root(base_url: &str) -> Self {
        Self::new(base_url, "/")
    }

    pub fn collections(base_url: &str) -> Self {
        Self::new(base_url, "/collections")
    }

    /// `/collections/{collection_name}/search`, with the name percent-encoded
    pub fn search(base_url: &str, collection_name: &str) -> Self {
        Self::new(
            base_url,
            format!(
                "/collections/{}/search",
                urlencoding::encode(collection_name)
            ),
        )
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}

/// Shorthand for `EndpointTarget::new(base_url, path).url()`
pub fn url_for(base_url: &str, path: &str) -> String {
    EndpointTarget::new(base_url, path).url()
}
