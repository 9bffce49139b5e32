use std::str::FromStr;

use log::Level;
use yew::AttrValue;

use crate::error::Error;
use crate::model::message::MessageId;
use crate::Result;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:5001/api";

/// meta tags rendered into the page by the server
pub const API_ENDPOINT_META: &str = "api-endpoint";
pub const CSRF_TOKEN_META: &str = "csrf-token";
pub const LOG_LEVEL_META: &str = "log-level";

/// configuration injected at page-render time
#[derive(Debug, Clone, PartialEq)]
pub struct LikeConfig {
    pub api_endpoint: AttrValue,
    pub csrf_token: AttrValue,
    pub log_level: Level,
}

impl LikeConfig {
    pub fn new(api_endpoint: impl Into<String>, csrf_token: impl Into<AttrValue>) -> Self {
        Self {
            api_endpoint: normalize_endpoint(api_endpoint.into()),
            csrf_token: csrf_token.into(),
            log_level: Level::Info,
        }
    }

    /// read the config from the `<meta>` tags of the current document
    pub fn from_document() -> Result<Self> {
        Self::from_lookup(utils::get_meta_content)
    }

    /// build the config from a `meta name -> content` lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_endpoint = lookup(API_ENDPOINT_META)
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        // an empty token is accepted, the backend may have csrf checks disabled
        let csrf_token = lookup(CSRF_TOKEN_META).ok_or_else(|| {
            Error::Config(format!("missing <meta name=\"{}\">", CSRF_TOKEN_META))
        })?;

        let log_level = match lookup(LOG_LEVEL_META) {
            Some(level) => Level::from_str(level.trim())
                .map_err(|_| Error::Config(format!("invalid log level: {:?}", level)))?,
            None => Level::Info,
        };

        Ok(Self {
            log_level,
            ..Self::new(api_endpoint, csrf_token)
        })
    }

    pub fn likes_url(&self, message_id: &MessageId) -> String {
        format!("{}/messages/{}/likes", self.api_endpoint, message_id)
    }
}

fn normalize_endpoint(endpoint: String) -> AttrValue {
    AttrValue::from(endpoint.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_likes_url() {
        let config = LikeConfig::new("http://localhost:5001/api/", "tok");
        assert_eq!(
            config.likes_url(&MessageId::from(42)),
            "http://localhost:5001/api/messages/42/likes"
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = LikeConfig::from_lookup(lookup(&[("csrf-token", "abc")])).unwrap();
        assert_eq!(config.api_endpoint.as_str(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.csrf_token.as_str(), "abc");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = LikeConfig::from_lookup(lookup(&[
            ("api-endpoint", "https://warbler.example/api//"),
            ("csrf-token", ""),
            ("log-level", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api_endpoint.as_str(), "https://warbler.example/api");
        assert_eq!(config.csrf_token.as_str(), "");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_from_lookup_errors() {
        assert!(matches!(
            LikeConfig::from_lookup(lookup(&[])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            LikeConfig::from_lookup(lookup(&[("csrf-token", "t"), ("log-level", "loud")])),
            Err(Error::Config(_))
        ));
    }
}
