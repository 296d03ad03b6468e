use std::time::Duration;

use reqwest::Client;

use crate::{
    hpp::HppGateway, modification::ModificationGateway, payment::PaymentGateway,
    recurring::RecurringGateway, AdyenConfig, AdyenError, Credentials, Environment, API_VERSION,
    DEFAULT_CURRENCY,
};

/// Settings that are stored on the client but never copied into requests. Request data always
/// wins; these are only here so callers can keep their defaults in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdyenOptions {
    pub currency: String,
    pub merchant_account: String,
    pub timeout: Option<Duration>,
    /// Emit full request and response bodies as `debug` events.
    pub log_payloads: bool,
}

impl Default for AdyenOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            merchant_account: String::new(),
            timeout: None,
            log_payloads: false,
        }
    }
}

/// Entry point to the Adyen API.
///
/// ```no_run
/// # async fn demo() -> Result<(), adyen_client::AdyenError> {
/// use adyen_client::{Adyen, Environment};
///
/// let adyen = Adyen::new(Environment::Testing, "ws@Company.Acme", "password")?;
/// let payments = adyen.payment();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Adyen {
    credentials: Credentials,
    options: AdyenOptions,
    client: Client,
}

pub struct AdyenBuilder {
    credentials: Credentials,
    options: AdyenOptions,
    client: Option<Client>,
}

impl AdyenBuilder {
    pub fn currency<S: Into<String>>(mut self, currency: S) -> Self {
        self.options.currency = currency.into();
        self
    }

    pub fn merchant_account<S: Into<String>>(mut self, account: S) -> Self {
        self.options.merchant_account = account.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn log_payloads(mut self, enabled: bool) -> Self {
        self.options.log_payloads = enabled;
        self
    }

    /// Applies an arbitrary option function. Options are applied in the order they are given, so
    /// later ones win.
    pub fn with<F: FnOnce(&mut AdyenOptions)>(mut self, option: F) -> Self {
        option(&mut self.options);
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with a proxy or custom TLS roots.
    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<Adyen, AdyenError> {
        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .build()
                .map_err(|e| AdyenError::Initialization(e.to_string()))?,
        };
        trace!(
            "Adyen client created for the {} environment",
            self.credentials.env()
        );
        Ok(Adyen {
            credentials: self.credentials,
            options: self.options,
            client,
        })
    }
}

impl Adyen {
    pub fn builder(credentials: Credentials) -> AdyenBuilder {
        AdyenBuilder {
            credentials,
            options: AdyenOptions::default(),
            client: None,
        }
    }

    /// Client for the backend API only.
    pub fn new<S: Into<String>>(
        env: Environment,
        username: S,
        password: S,
    ) -> Result<Self, AdyenError> {
        Self::builder(Credentials::new(env, username, password)).build()
    }

    /// Client that can also sign hosted payment page requests. `hmac` is the hex key of the skin.
    pub fn new_with_hmac<S: Into<String>>(
        env: Environment,
        username: S,
        password: S,
        hmac: S,
    ) -> Result<Self, AdyenError> {
        Self::builder(Credentials::with_hmac(env, username, password, hmac)).build()
    }

    pub fn from_config(config: &AdyenConfig) -> Result<Self, AdyenError> {
        let credentials = match &config.hmac {
            Some(hmac) => Credentials::with_hmac(
                config.environment.clone(),
                config.username.clone(),
                config.password.clone(),
                hmac.clone(),
            ),
            None => Credentials::new(
                config.environment.clone(),
                config.username.clone(),
                config.password.clone(),
            ),
        };
        let mut builder = Self::builder(credentials)
            .currency(config.currency.clone())
            .merchant_account(config.merchant_account.clone())
            .log_payloads(config.log_payloads);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn options(&self) -> &AdyenOptions {
        &self.options
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub fn currency(&self) -> &str {
        &self.options.currency
    }

    pub fn set_currency<S: Into<String>>(&mut self, currency: S) {
        self.options.currency = currency.into();
    }

    pub fn merchant_account(&self) -> &str {
        &self.options.merchant_account
    }

    pub fn set_merchant_account<S: Into<String>>(&mut self, account: S) {
        self.options.merchant_account = account.into();
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.options.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.options.timeout = timeout;
    }

    pub fn log_payloads(&self) -> bool {
        self.options.log_payloads
    }

    pub fn set_log_payloads(&mut self, enabled: bool) {
        self.options.log_payloads = enabled;
    }

    /// URL of the script that encrypts card data in the shopper's browser.
    pub fn client_url(&self, client_id: &str) -> String {
        self.credentials.env().client_url(client_id)
    }

    /// Backend endpoint, e.g. `.../pal/servlet/Payment/v25/authorise/`
    pub fn adyen_url(&self, service: &str, request_type: &str) -> String {
        let base = self.credentials.env().base_url(service, API_VERSION);
        format!("{base}/{request_type}/")
    }

    pub fn hpp_url(&self, request_type: &str) -> String {
        self.credentials.env().hpp_url(request_type)
    }

    pub fn payment(&self) -> PaymentGateway<'_> {
        PaymentGateway::new(self)
    }

    pub fn modification(&self) -> ModificationGateway<'_> {
        ModificationGateway::new(self)
    }

    pub fn recurring(&self) -> RecurringGateway<'_> {
        RecurringGateway::new(self)
    }

    pub fn hpp(&self) -> HppGateway<'_> {
        HppGateway::new(self)
    }
}
