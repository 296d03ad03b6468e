use serde::{Deserialize, Serialize};

/// A monetary amount in minor units, e.g. `Amount::new("EUR", 1000)` is EUR 10.00
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Amount {
    pub value: i64,
    pub currency: String,
}

impl Amount {
    pub fn new<S: Into<String>>(currency: S, value: i64) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

/// Plain card details. Only usable by PCI compliant merchants; everyone else should send
/// client-side encrypted data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub expiry_month: String,
    pub expiry_year: String,
    pub holder_name: String,
    pub number: String,
    pub cvc: String,
}

pub const ONECLICK: &str = "ONECLICK";
pub const RECURRING: &str = "RECURRING";
pub const ONECLICK_RECURRING: &str = "ONECLICK,RECURRING";
pub const PAYOUT: &str = "PAYOUT";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recurring {
    pub contract: String,
}

impl Recurring {
    pub fn new<S: Into<String>>(contract: S) -> Self {
        Self {
            contract: contract.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub accept_header: String,
    pub user_agent: String,
}

/// The reply to every modification request. `response` echoes what was received, e.g.
/// `[capture-received]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModificationResponse {
    pub psp_reference: String,
    pub response: String,
}
