//! The two ways of talking to Adyen.
//!
//! The backend API takes authenticated `POST` requests with a JSON body. The hosted payment page
//! takes unsigned `GET` requests with the parameters in the query string (HPP requests carry
//! their own `merchantSig` instead). Both read the full reply into a [`Response`] and fail on any
//! non-2xx status.

use reqwest::{header, RequestBuilder};
use serde::Serialize;

use crate::{Adyen, AdyenError, Response};

impl Adyen {
    /// Sends `entity` as JSON to `{service}/{version}/{request_type}/` using basic auth.
    pub(crate) async fn execute<T>(
        &self,
        service: &str,
        request_type: &str,
        entity: &T,
    ) -> Result<Response, AdyenError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(entity).map_err(AdyenError::Serialization)?;
        let url = self.adyen_url(service, request_type);
        trace!("[Request]: POST {url}");
        if self.log_payloads() {
            debug!(
                "[Request]: {request_type} {url}\n{}",
                String::from_utf8_lossy(&body)
            );
        }
        let req = self
            .http()
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(
                self.credentials().username(),
                Some(self.credentials().password()),
            )
            .body(body);
        self.send(req, request_type, &url).await
    }

    /// Sends a prepared HPP URL (see [`Adyen::hpp_request_url`]) as a plain `GET`. No
    /// credentials are attached.
    pub(crate) async fn execute_hpp(
        &self,
        request_type: &str,
        url: url::Url,
    ) -> Result<Response, AdyenError> {
        trace!("[Request]: GET {url}");
        if self.log_payloads() {
            debug!("[Request]: {request_type} {url}");
        }
        let req = self.http().get(url.as_str());
        self.send(req, request_type, url.as_str()).await
    }

    /// The full HPP URL, query string included, without sending anything.
    pub(crate) fn hpp_request_url<T>(
        &self,
        request_type: &str,
        entity: &T,
    ) -> Result<url::Url, AdyenError>
    where
        T: Serialize + ?Sized,
    {
        let base = url::Url::parse(&self.hpp_url(request_type))?;
        let request = self
            .http()
            .get(base)
            .query(entity)
            .build()
            .map_err(|e| AdyenError::Http {
                context: format!("Could not encode {request_type} parameters"),
                source: e,
            })?;
        Ok(request.url().clone())
    }

    async fn send(
        &self,
        req: RequestBuilder,
        request_type: &str,
        url: &str,
    ) -> Result<Response, AdyenError> {
        let req = match self.timeout() {
            Some(timeout) => req.timeout(timeout),
            None => req,
        };
        let response = req.send().await.map_err(|e| AdyenError::Http {
            context: format!("{request_type} request failed"),
            source: e,
        })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| AdyenError::Http {
            context: format!("Could not read {request_type} response"),
            source: e,
        })?;
        trace!("[Response]: {request_type} {url} {status}");
        if self.log_payloads() {
            debug!(
                "[Response]: {request_type} {url}\n{}",
                String::from_utf8_lossy(&body)
            );
        }
        let result = Response::new(status, body).error_for_status();
        if let Err(e) = &result {
            warn!("{request_type} call to Adyen failed. {e}");
        }
        result
    }
}
