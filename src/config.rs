use std::time::Duration;

use crate::{AdyenError, Environment, DEFAULT_CURRENCY};

/// Everything needed to build an [`crate::Adyen`] client, usually read from the process
/// environment.
#[derive(Debug, Clone, Default)]
pub struct AdyenConfig {
    pub environment: Environment,
    pub username: String,
    pub password: String,
    pub hmac: Option<String>,
    pub merchant_account: String,
    pub currency: String,
    pub timeout: Option<Duration>,
    pub log_payloads: bool,
}

impl AdyenConfig {
    /// Reads `ADYEN_*` variables. Missing values fall back to defaults with a warning; values that
    /// are present but malformed are an error. Leave `ADYEN_TIMEOUT_SECS` unset for no timeout;
    /// `0` is rejected.
    pub fn new_from_env_or_default() -> Result<Self, AdyenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AdyenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ADYEN_ENVIRONMENT") {
            Some(s) => s.parse::<Environment>()?,
            None => {
                warn!("ADYEN_ENVIRONMENT not set, using the test platform");
                Environment::Testing
            }
        };
        let username = lookup("ADYEN_USERNAME").unwrap_or_else(|| {
            warn!("ADYEN_USERNAME not set. Backend API calls will be rejected");
            String::default()
        });
        let password = lookup("ADYEN_PASSWORD").unwrap_or_else(|| {
            warn!("ADYEN_PASSWORD not set. Backend API calls will be rejected");
            String::default()
        });
        let hmac = lookup("ADYEN_HMAC").filter(|s| !s.is_empty());
        if hmac.is_none() {
            debug!("ADYEN_HMAC not set. Hosted payment page calls are unavailable");
        }
        let merchant_account = lookup("ADYEN_MERCHANT_ACCOUNT").unwrap_or_default();
        let currency = lookup("ADYEN_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let timeout = match lookup("ADYEN_TIMEOUT_SECS") {
            Some(s) => Some(parse_timeout(&s)?),
            None => None,
        };
        let log_payloads = lookup("ADYEN_LOG_PAYLOADS")
            .map(|s| is_truthy(&s))
            .unwrap_or(false);
        Ok(Self {
            environment,
            username,
            password,
            hmac,
            merchant_account,
            currency,
            timeout,
            log_payloads,
        })
    }
}

/// Whole seconds, at least 1.
fn parse_timeout(s: &str) -> Result<Duration, AdyenError> {
    let secs = s
        .trim()
        .parse::<u64>()
        .map_err(|e| AdyenError::Initialization(format!("Invalid ADYEN_TIMEOUT_SECS '{s}': {e}")))?;
    if secs == 0 {
        return Err(AdyenError::Initialization(
            "ADYEN_TIMEOUT_SECS must be at least 1. Leave it unset for no timeout".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn is_truthy(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, time::Duration};

    use pretty_assertions::assert_eq;

    use super::AdyenConfig;
    use crate::{AdyenError, Environment};

    fn config_from(vars: &[(&str, &str)]) -> Result<AdyenConfig, AdyenError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        AdyenConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Testing);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.merchant_account, "");
        assert_eq!(config.hmac, None);
        assert_eq!(config.timeout, None);
        assert!(!config.log_payloads);
    }

    #[test]
    fn all_values() {
        let config = config_from(&[
            ("ADYEN_ENVIRONMENT", "live"),
            ("ADYEN_USERNAME", "ws@Company.Acme"),
            ("ADYEN_PASSWORD", "pw"),
            ("ADYEN_HMAC", "ABCD"),
            ("ADYEN_MERCHANT_ACCOUNT", "AcmeCOM"),
            ("ADYEN_CURRENCY", "USD"),
            ("ADYEN_TIMEOUT_SECS", "45"),
            ("ADYEN_LOG_PAYLOADS", "yes"),
        ])
        .unwrap();
        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.username, "ws@Company.Acme");
        assert_eq!(config.password, "pw");
        assert_eq!(config.hmac.as_deref(), Some("ABCD"));
        assert_eq!(config.merchant_account, "AcmeCOM");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
        assert!(config.log_payloads);
    }

    #[test]
    fn malformed_values() {
        assert!(config_from(&[("ADYEN_ENVIRONMENT", "staging")]).is_err());
        assert!(config_from(&[("ADYEN_TIMEOUT_SECS", "soon")]).is_err());
        let config = config_from(&[("ADYEN_HMAC", "")]).unwrap();
        assert_eq!(config.hmac, None);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        for secs in ["0", " 0 ", "00"] {
            match config_from(&[("ADYEN_TIMEOUT_SECS", secs)]) {
                Err(AdyenError::Initialization(msg)) => assert!(msg.contains("at least 1")),
                other => panic!("expected a rejected timeout for {secs:?}, got {other:?}"),
            }
        }
        let config = config_from(&[("ADYEN_TIMEOUT_SECS", "1")]).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(1)));
    }
}
