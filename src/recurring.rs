use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    model::{Card, Recurring},
    Adyen, AdyenError, RECURRING_SERVICE,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsRequest {
    pub merchant_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    pub shopper_reference: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringDetail {
    pub recurring_detail_reference: String,
    pub variant: String,
    pub payment_method_variant: Option<String>,
    pub alias: Option<String>,
    pub alias_type: Option<String>,
    pub creation_date: Option<String>,
    pub first_psp_reference: Option<String>,
    pub contract_types: Vec<String>,
    pub card: Option<Card>,
    pub additional_data: Option<HashMap<String, Value>>,
}

/// Adyen wraps each detail in a `{"RecurringDetail": {...}}` object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecurringDetailItem {
    #[serde(rename = "RecurringDetail")]
    pub recurring_detail: RecurringDetail,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringDetailsResult {
    pub creation_date: Option<String>,
    pub details: Vec<RecurringDetailItem>,
    pub last_known_shopper_email: Option<String>,
    pub shopper_reference: String,
}

impl RecurringDetailsResult {
    pub fn recurring_details(&self) -> impl Iterator<Item = &RecurringDetail> {
        self.details.iter().map(|d| &d.recurring_detail)
    }
}

/// Disables one stored detail, or all of the shopper's details when `recurring_detail_reference`
/// is absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDisableRequest {
    pub merchant_account: String,
    pub shopper_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_detail_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecurringDisableResponse {
    pub response: String,
}

pub struct RecurringGateway<'a> {
    adyen: &'a Adyen,
}

impl<'a> RecurringGateway<'a> {
    pub(crate) fn new(adyen: &'a Adyen) -> Self {
        Self { adyen }
    }

    pub async fn list_recurring_details(
        &self,
        req: &RecurringDetailsRequest,
    ) -> Result<RecurringDetailsResult, AdyenError> {
        debug!(
            "Fetching recurring details for shopper {}",
            req.shopper_reference
        );
        let response = self
            .adyen
            .execute(RECURRING_SERVICE, "listRecurringDetails", req)
            .await?;
        let result = response.json::<RecurringDetailsResult>()?;
        info!(
            "Fetched {} recurring details for shopper {}",
            result.details.len(),
            req.shopper_reference
        );
        Ok(result)
    }

    pub async fn disable(
        &self,
        req: &RecurringDisableRequest,
    ) -> Result<RecurringDisableResponse, AdyenError> {
        debug!(
            "Disabling recurring details for shopper {}",
            req.shopper_reference
        );
        let response = self
            .adyen
            .execute(RECURRING_SERVICE, "disable", req)
            .await?;
        let result = response.json::<RecurringDisableResponse>()?;
        info!(
            "Disable for shopper {}: {}",
            req.shopper_reference, result.response
        );
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{model::RECURRING, Credentials, Environment};

    fn client_for(server: &MockServer) -> Adyen {
        let env = Environment::custom(
            format!("{}/pal", server.uri()),
            server.uri(),
            server.uri(),
        );
        Adyen::builder(Credentials::new(env, "un", "pw"))
            .build()
            .unwrap()
    }

    const DETAILS: &str = r#"{
        "creationDate": "2017-03-01T11:53:11+01:00",
        "details": [
            {
                "RecurringDetail": {
                    "additionalData": {"cardBin": "411111"},
                    "alias": "H167852639363479",
                    "aliasType": "Default",
                    "card": {
                        "expiryMonth": "8",
                        "expiryYear": "2018",
                        "holderName": "John Smith",
                        "number": "1111"
                    },
                    "contractTypes": ["ONECLICK"],
                    "creationDate": "2017-03-07T09:43:33+01:00",
                    "firstPspReference": "8524888762135795",
                    "paymentMethodVariant": "visa",
                    "recurringDetailReference": "8314888762135795",
                    "variant": "visa"
                }
            }
        ],
        "lastKnownShopperEmail": "s.hopper@test.com",
        "shopperReference": "shopper-1"
    }"#;

    #[test]
    fn details_response_parsing() {
        let result: RecurringDetailsResult = serde_json::from_str(DETAILS).unwrap();
        assert_eq!(result.shopper_reference, "shopper-1");
        let details = result.recurring_details().collect::<Vec<_>>();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].recurring_detail_reference, "8314888762135795");
        assert_eq!(details[0].contract_types, vec!["ONECLICK"]);
        let card = details[0].card.as_ref().unwrap();
        assert_eq!(card.number, "1111");
        assert_eq!(card.cvc, "");
    }

    #[test]
    fn disable_field_names() {
        let req = RecurringDisableRequest {
            merchant_account: "AcmeCOM".into(),
            shopper_reference: "shopper-1".into(),
            recurring_detail_reference: Some("8314888762135795".into()),
            contract: None,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({
                "merchantAccount": "AcmeCOM",
                "shopperReference": "shopper-1",
                "recurringDetailReference": "8314888762135795"
            })
        );
    }

    #[tokio::test]
    async fn list_recurring_details() {
        let server = MockServer::start().await;
        let req = RecurringDetailsRequest {
            merchant_account: "AcmeCOM".into(),
            recurring: Some(Recurring::new(RECURRING)),
            shopper_reference: "shopper-1".into(),
        };
        Mock::given(method("POST"))
            .and(path("/pal/Recurring/v25/listRecurringDetails/"))
            .and(body_json(json!({
                "merchantAccount": "AcmeCOM",
                "recurring": {"contract": "RECURRING"},
                "shopperReference": "shopper-1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(DETAILS))
            .expect(1)
            .mount(&server)
            .await;

        let adyen = client_for(&server);
        let result = adyen
            .recurring()
            .list_recurring_details(&req)
            .await
            .unwrap();
        assert_eq!(result.details.len(), 1);
        assert_eq!(
            result.last_known_shopper_email.as_deref(),
            Some("s.hopper@test.com")
        );
    }

    #[tokio::test]
    async fn disable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pal/Recurring/v25/disable/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "[all-details-successfully-disabled]"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adyen = client_for(&server);
        let req = RecurringDisableRequest {
            merchant_account: "AcmeCOM".into(),
            shopper_reference: "shopper-1".into(),
            ..Default::default()
        };
        let result = adyen.recurring().disable(&req).await.unwrap();
        assert_eq!(result.response, "[all-details-successfully-disabled]");
    }
}
