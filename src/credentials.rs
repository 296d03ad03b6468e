use std::fmt::{Debug, Formatter};

use crate::Environment;

/// API user credentials plus the environment they belong to.
///
/// The HMAC key is only needed for the hosted payment page. It is generated when a skin is
/// created in the Adyen Customer Area. Nothing here can be changed after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    env: Environment,
    username: String,
    password: String,
    hmac: Option<String>,
}

impl Credentials {
    pub fn new<S: Into<String>>(env: Environment, username: S, password: S) -> Self {
        Self {
            env,
            username: username.into(),
            password: password.into(),
            hmac: None,
        }
    }

    pub fn with_hmac<S: Into<String>>(env: Environment, username: S, password: S, hmac: S) -> Self {
        Self {
            env,
            username: username.into(),
            password: password.into(),
            hmac: Some(hmac.into()),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn hmac(&self) -> Option<&str> {
        self.hmac.as_deref().filter(|h| !h.is_empty())
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("env", &self.env)
            .field("username", &self.username)
            .field("password", &"****")
            .field("hmac", &self.hmac.as_ref().map(|_| "****"))
            .finish()
    }
}
