use serde::{Deserialize, Serialize};

use crate::{
    model::{Amount, ModificationResponse},
    Adyen, AdyenError, PAYMENT_SERVICE,
};

/// Captures an authorised payment. `original_reference` is the `pspReference` of the
/// authorisation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    pub merchant_account: String,
    pub modification_amount: Amount,
    pub original_reference: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cancel {
    pub merchant_account: String,
    pub original_reference: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub merchant_account: String,
    pub modification_amount: Amount,
    pub original_reference: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

/// Cancels the payment if it has not been captured yet, refunds it otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrRefund {
    pub merchant_account: String,
    pub original_reference: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

pub struct ModificationGateway<'a> {
    adyen: &'a Adyen,
}

impl<'a> ModificationGateway<'a> {
    pub(crate) fn new(adyen: &'a Adyen) -> Self {
        Self { adyen }
    }

    pub async fn capture(&self, req: &Capture) -> Result<ModificationResponse, AdyenError> {
        self.modify("capture", &req.original_reference, req).await
    }

    pub async fn cancel(&self, req: &Cancel) -> Result<ModificationResponse, AdyenError> {
        self.modify("cancel", &req.original_reference, req).await
    }

    pub async fn refund(&self, req: &Refund) -> Result<ModificationResponse, AdyenError> {
        self.modify("refund", &req.original_reference, req).await
    }

    pub async fn cancel_or_refund(
        &self,
        req: &CancelOrRefund,
    ) -> Result<ModificationResponse, AdyenError> {
        self.modify("cancelOrRefund", &req.original_reference, req)
            .await
    }

    async fn modify<T: Serialize>(
        &self,
        request_type: &str,
        original_reference: &str,
        req: &T,
    ) -> Result<ModificationResponse, AdyenError> {
        debug!("Sending {request_type} for payment {original_reference}");
        let response = self
            .adyen
            .execute(PAYMENT_SERVICE, request_type, req)
            .await?;
        let result = response.json::<ModificationResponse>()?;
        info!(
            "{request_type} for payment {original_reference}: {} ({})",
            result.response, result.psp_reference
        );
        Ok(result)
    }
}
