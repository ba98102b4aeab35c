use url::Url;

use crate::error::PaginationError;

/// Absolute URL a paged route was called with.
///
/// Strategies that link to neighbouring pages rebuild this URL with an
/// adjusted page parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    url: Url,
}

impl PageRequest {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse an absolute request URL.
    pub fn parse(url: &str) -> Result<Self, PaginationError> {
        Url::parse(url)
            .map(Self::new)
            .map_err(|source| PaginationError::InvalidRequestUrl {
                url: url.to_string(),
                source,
            })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Rebuild the request URL with the query parameter `name` set to
    /// `value`.
    ///
    /// An existing parameter is replaced in place so the rest of the query
    /// keeps its order; a missing one is appended. `None` removes the
    /// parameter, and a query left empty is dropped entirely so no dangling
    /// `?` remains.
    pub fn replace_query(&self, name: &str, value: Option<&str>) -> Url {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut replaced = false;
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (k, v) in &pairs {
                if k == name {
                    if let (Some(value), false) = (value, replaced) {
                        query.append_pair(k, value);
                        replaced = true;
                    }
                } else {
                    query.append_pair(k, v);
                }
            }
            if let (Some(value), false) = (value, replaced) {
                query.append_pair(name, value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> PageRequest {
        PageRequest::parse(url).expect("test url parses")
    }

    #[test]
    fn parse_rejects_relative_urls() {
        let err = PageRequest::parse("/listings?page=2").unwrap_err();
        assert!(matches!(err, PaginationError::InvalidRequestUrl { .. }));
    }

    #[test]
    fn replace_keeps_parameter_position() {
        let url = request("http://testlocation/listings?page=2&flavour=sour")
            .replace_query("page", Some("3"));
        assert_eq!("http://testlocation/listings?page=3&flavour=sour", url.as_str());
    }

    #[test]
    fn replace_appends_missing_parameter() {
        let url = request("http://testlocation/listings?flavour=sour")
            .replace_query("page", Some("2"));
        assert_eq!("http://testlocation/listings?flavour=sour&page=2", url.as_str());
    }

    #[test]
    fn remove_drops_an_empty_query_entirely() {
        let url = request("http://testlocation/listings?page=2").replace_query("page", None);
        assert_eq!("http://testlocation/listings", url.as_str());
    }

    #[test]
    fn remove_keeps_other_parameters() {
        let url = request("http://testlocation/listings?page=2&flavour=sour")
            .replace_query("page", None);
        assert_eq!("http://testlocation/listings?flavour=sour", url.as_str());
    }

    #[test]
    fn replace_collapses_duplicate_parameters() {
        let url = request("http://testlocation/listings?page=2&page=5")
            .replace_query("page", Some("3"));
        assert_eq!("http://testlocation/listings?page=3", url.as_str());
    }
}
