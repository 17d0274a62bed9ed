use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A fully built outbound request, ready to hand to a
/// [`Fetcher`](crate::fetcher::Fetcher). Equal inputs build equal requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: Url, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url,
            headers,
            body: None,
        }
    }

    pub fn post_json(url: Url, mut headers: HeaderMap, body: String) -> Self {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            method: Method::POST,
            url,
            headers,
            body: Some(body),
        }
    }

    /// Value of a query parameter, if present
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Sort key of the cursor-list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSort {
    Popular,
    Latest,
}

impl ListingSort {
    pub fn sort_by(self) -> &'static str {
        match self {
            ListingSort::Popular => "likes",
            ListingSort::Latest => "lastUpdated",
        }
    }
}

/// Which JSON shape a listing response arrives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    /// `{"data": [...]}`, returned by the cursor-list endpoint
    Wrapped,
    /// `[...]`, returned by search
    BareArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_sets_content_type() {
        let url = Url::parse("https://api.example/list").unwrap();
        let request = ApiRequest::post_json(url, HeaderMap::new(), "{}".into());
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_get_has_no_body() {
        let url = Url::parse("https://api.example/list?a=1").unwrap();
        let request = ApiRequest::get(url, HeaderMap::new());
        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
        assert_eq!(request.query_param("a").as_deref(), Some("1"));
        assert_eq!(request.query_param("b"), None);
    }

    #[test]
    fn test_sort_keys() {
        assert_eq!(ListingSort::Popular.sort_by(), "likes");
        assert_eq!(ListingSort::Latest.sort_by(), "lastUpdated");
    }
}
