//! Hosted payment page (HPP) calls.
//!
//! These go to a different host than the backend API, are sent as plain `GET` requests and are
//! authenticated only by the `merchantSig` parameter, which is computed from the skin's HMAC key
//! over the query string exactly as it is sent.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{signature, Adyen, AdyenError};

/// Asks Adyen which payment methods are available for a given amount and country.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLookupRequest {
    pub currency_code: String,
    pub merchant_account: String,
    pub payment_amount: i64,
    pub skin_code: String,
    pub merchant_reference: String,
    pub session_validity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ship_before_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub merchant_sig: String,
}

/// Sends the shopper straight to a payment method, skipping Adyen's method selection page.
///
/// Optional fields left empty are not sent at all.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkipHppRequest {
    pub merchant_reference: String,
    pub payment_amount: i64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ship_before_date: String,
    pub skin_code: String,
    pub merchant_account: String,
    pub session_validity: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shopper_locale: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brand_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shopper_email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,
    #[serde(rename = "resURL", skip_serializing_if = "String::is_empty")]
    pub res_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub merchant_sig: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Logos {
    pub normal: String,
    pub small: String,
    pub tiny: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Issuer {
    pub issuer_id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethod {
    pub brand_code: String,
    pub name: String,
    pub logos: Logos,
    pub issuers: Vec<Issuer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryLookupResponse {
    pub payment_methods: Vec<PaymentMethod>,
}

/// The HPP pages a shopper can be redirected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HppPage {
    /// Adyen shows all configured payment methods.
    Select,
    /// Adyen shows the details form for the chosen `brandCode`.
    Details,
    /// Straight to the issuer for the chosen `brandCode` and `issuerId`.
    SkipDetails,
}

impl HppPage {
    pub fn request_type(&self) -> &'static str {
        match self {
            HppPage::Select => "select",
            HppPage::Details => "details",
            HppPage::SkipDetails => "skipDetails",
        }
    }
}

trait Signable: Serialize {
    fn merchant_reference(&self) -> &str;
    fn merchant_sig(&self) -> &str;
}

impl Signable for DirectoryLookupRequest {
    fn merchant_reference(&self) -> &str {
        &self.merchant_reference
    }

    fn merchant_sig(&self) -> &str {
        &self.merchant_sig
    }
}

impl Signable for SkipHppRequest {
    fn merchant_reference(&self) -> &str {
        &self.merchant_reference
    }

    fn merchant_sig(&self) -> &str {
        &self.merchant_sig
    }
}

pub struct HppGateway<'a> {
    adyen: &'a Adyen,
}

impl<'a> HppGateway<'a> {
    pub(crate) fn new(adyen: &'a Adyen) -> Self {
        Self { adyen }
    }

    /// Encodes `req` for `request_type` and signs the resulting query. Any `merchantSig` already
    /// on the request is replaced; the request itself is left untouched.
    fn signed_url<T: Signable>(&self, request_type: &str, req: &T) -> Result<Url, AdyenError> {
        let key = self
            .adyen
            .credentials()
            .hmac()
            .ok_or(AdyenError::MissingHmac)?;
        if !req.merchant_sig().is_empty() {
            debug!(
                "Ignoring existing merchantSig on {}",
                req.merchant_reference()
            );
        }
        let mut url = self.adyen.hpp_request_url(request_type, req)?;
        signature::sign_url(key, &mut url)?;
        Ok(url)
    }

    pub async fn directory_lookup(
        &self,
        req: &DirectoryLookupRequest,
    ) -> Result<DirectoryLookupResponse, AdyenError> {
        let url = self.signed_url("directory", req)?;
        debug!("Looking up payment methods for {}", req.merchant_reference);
        let response = self.adyen.execute_hpp("directory", url).await?;
        let result = response.json::<DirectoryLookupResponse>()?;
        info!(
            "{} payment methods available for {}",
            result.payment_methods.len(),
            req.merchant_reference
        );
        Ok(result)
    }

    /// Signed URL of the skip-details page for this request. Nothing is sent; the shopper's
    /// browser follows the URL.
    pub fn redirect_url(&self, req: &SkipHppRequest) -> Result<String, AdyenError> {
        self.page_url(HppPage::SkipDetails, req)
    }

    pub fn page_url(&self, page: HppPage, req: &SkipHppRequest) -> Result<String, AdyenError> {
        let url = self.signed_url(page.request_type(), req)?;
        debug!("HPP redirect for {}: {url}", req.merchant_reference);
        Ok(url.to_string())
    }
}
