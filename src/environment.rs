use std::{fmt::Display, str::FromStr};

use crate::AdyenError;

const TEST_API_URL: &str = "https://pal-test.adyen.com/pal/servlet";
const TEST_CLIENT_URL: &str = "https://test.adyen.com/hpp/cse/js/";
const TEST_HPP_URL: &str = "https://test.adyen.com/hpp/";

const LIVE_API_URL: &str = "https://pal-live.adyen.com/pal/servlet";
const LIVE_CLIENT_URL: &str = "https://live.adyen.com/hpp/cse/js/";
const LIVE_HPP_URL: &str = "https://live.adyen.com/hpp/";

/// The Adyen platform that calls are sent to.
///
/// `Custom` points every endpoint family at caller-supplied roots, which is how you talk to a
/// proxy or a mock server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Testing,
    Live,
    Custom {
        api_url: String,
        client_url: String,
        hpp_url: String,
    },
}

impl Environment {
    pub fn custom<S: Into<String>>(api_url: S, client_url: S, hpp_url: S) -> Self {
        Self::Custom {
            api_url: api_url.into(),
            client_url: client_url.into(),
            hpp_url: hpp_url.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    fn api_root(&self) -> &str {
        match self {
            Environment::Testing => TEST_API_URL,
            Environment::Live => LIVE_API_URL,
            Environment::Custom { api_url, .. } => api_url.trim_end_matches('/'),
        }
    }

    fn client_root(&self) -> &str {
        match self {
            Environment::Testing => TEST_CLIENT_URL,
            Environment::Live => LIVE_CLIENT_URL,
            Environment::Custom { client_url, .. } => client_url,
        }
    }

    fn hpp_root(&self) -> &str {
        match self {
            Environment::Testing => TEST_HPP_URL,
            Environment::Live => LIVE_HPP_URL,
            Environment::Custom { hpp_url, .. } => hpp_url,
        }
    }

    /// Backend API root for a service, e.g. `https://pal-test.adyen.com/pal/servlet/Payment/v25`
    pub fn base_url(&self, service: &str, version: &str) -> String {
        format!("{}/{service}/{version}", self.api_root())
    }

    /// Location of the client-side encryption script for the given library token.
    pub fn client_url(&self, client_id: &str) -> String {
        format!(
            "{}{client_id}.shtml",
            with_trailing_slash(self.client_root())
        )
    }

    /// Hosted payment page endpoint, e.g. `https://test.adyen.com/hpp/directory.shtml`
    pub fn hpp_url(&self, request: &str) -> String {
        format!("{}{request}.shtml", with_trailing_slash(self.hpp_root()))
    }
}

fn with_trailing_slash(root: &str) -> String {
    if root.ends_with('/') {
        root.to_string()
    } else {
        format!("{root}/")
    }
}

impl FromStr for Environment {
    type Err = AdyenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" | "testing" => Ok(Environment::Testing),
            "live" | "production" => Ok(Environment::Live),
            _ => Err(AdyenError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Testing => write!(f, "test"),
            Environment::Live => write!(f, "live"),
            Environment::Custom { api_url, .. } => write!(f, "custom({api_url})"),
        }
    }
}
