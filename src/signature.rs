use std::collections::BTreeMap;

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::AdyenError;

/// Name of the parameter carrying the signature. It is never part of the signed data.
pub const MERCHANT_SIG: &str = "merchantSig";

/// The parameters Adyen will verify for a HPP URL: every decoded query pair except
/// `merchantSig`, empty values included.
///
/// Reading them back from the encoded URL means the signature always covers exactly what the
/// shopper's browser sends.
pub fn signing_params(url: &Url) -> BTreeMap<String, String> {
    url.query_pairs()
        .filter(|(k, _)| k != MERCHANT_SIG)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace(':', "\\:")
}

/// `key1:key2:...:value1:value2:...` with keys sorted and both halves escaped.
pub fn signing_string(params: &BTreeMap<String, String>) -> String {
    let keys = params.keys().map(|k| escape(k));
    let values = params.values().map(|v| escape(v));
    keys.chain(values).collect::<Vec<String>>().join(":")
}

/// Computes `merchantSig`: base64 of HMAC-SHA256 over the signing string, keyed by the
/// hex-decoded skin key.
pub fn merchant_signature(
    hmac_key: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, AdyenError> {
    let key = hex::decode(hmac_key.trim())?;
    let mut mac = Hmac::<Sha256>::new_from_slice(&key)
        .map_err(|e| AdyenError::Initialization(format!("Unusable HMAC key: {e}")))?;
    mac.update(signing_string(params).as_bytes());
    let code_bytes = mac.finalize().into_bytes();
    Ok(BASE64_STANDARD.encode(code_bytes))
}

/// Signs the query of `url` and appends the result as `merchantSig`, replacing any signature
/// already present. The other pairs keep their order and encoding.
pub fn sign_url(hmac_key: &str, url: &mut Url) -> Result<(), AdyenError> {
    let sig = merchant_signature(hmac_key, &signing_params(url))?;
    let pairs = url
        .query_pairs()
        .filter(|(k, _)| k != MERCHANT_SIG)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair(MERCHANT_SIG, &sig);
    Ok(())
}
