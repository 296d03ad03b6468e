use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    model::{Amount, BrowserInfo, Card, Recurring},
    Adyen, AdyenError, PAYMENT_SERVICE,
};

/// Authorisation with plain card data (or a stored recurring detail).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Authorise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(rename = "shopperIP", skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_recurring_detail_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// Card data encrypted in the browser by the script at [`Adyen::client_url`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct EncryptedCard {
    #[serde(rename = "card.encrypted.json")]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseEncrypted {
    pub additional_data: EncryptedCard,
    pub amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(rename = "shopperIP", skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// Completes a 3-D Secure authorisation once the shopper returns from the issuer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Authorise3D {
    pub md: String,
    pub merchant_account: String,
    pub pa_response: String,
    #[serde(rename = "shopperIP", skip_serializing_if = "Option::is_none")]
    pub shopper_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthoriseResponse {
    pub psp_reference: String,
    pub result_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refusal_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<HashMap<String, Value>>,
}

impl AuthoriseResponse {
    pub fn is_authorised(&self) -> bool {
        self.result_code == "Authorised"
    }

    pub fn is_refused(&self) -> bool {
        self.result_code == "Refused"
    }

    /// The shopper has to be sent to `issuer_url` for 3-D Secure before
    /// [`PaymentGateway::authorise_3d`] can be called.
    pub fn requires_redirect(&self) -> bool {
        self.result_code == "RedirectShopper"
    }
}

/// Backend payment calls.
pub struct PaymentGateway<'a> {
    adyen: &'a Adyen,
}

impl<'a> PaymentGateway<'a> {
    pub(crate) fn new(adyen: &'a Adyen) -> Self {
        Self { adyen }
    }

    pub async fn authorise(&self, req: &Authorise) -> Result<AuthoriseResponse, AdyenError> {
        debug!("Authorising payment {}", req.reference);
        let response = self
            .adyen
            .execute(PAYMENT_SERVICE, "authorise", req)
            .await?;
        let result = response.json::<AuthoriseResponse>()?;
        info!(
            "Payment {} authorisation result: {} ({})",
            req.reference, result.result_code, result.psp_reference
        );
        Ok(result)
    }

    pub async fn authorise_encrypted(
        &self,
        req: &AuthoriseEncrypted,
    ) -> Result<AuthoriseResponse, AdyenError> {
        debug!(
            "Authorising payment {} with encrypted card data",
            req.reference
        );
        let response = self
            .adyen
            .execute(PAYMENT_SERVICE, "authorise", req)
            .await?;
        let result = response.json::<AuthoriseResponse>()?;
        info!(
            "Payment {} authorisation result: {} ({})",
            req.reference, result.result_code, result.psp_reference
        );
        Ok(result)
    }

    pub async fn authorise_3d(&self, req: &Authorise3D) -> Result<AuthoriseResponse, AdyenError> {
        debug!("Completing 3-D Secure authorisation");
        let response = self
            .adyen
            .execute(PAYMENT_SERVICE, "authorise3d", req)
            .await?;
        let result = response.json::<AuthoriseResponse>()?;
        info!(
            "3-D Secure authorisation result: {} ({})",
            result.result_code, result.psp_reference
        );
        Ok(result)
    }
}
