//! Reqwest-backed [`ContactsApi`] adapter.
//!
//! This adapter owns transport details only: URL building, timeouts, and
//! decoding of the service's JSON envelopes into domain results.

use std::time::Duration;

use async_trait::async_trait;
use contact_rules::ContactDraft;
use reqwest::{Client, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::debug;
use uuid::Uuid;

use crate::api::{ApiError, ContactsApi};
use crate::model::{Contact, Envelope, ServiceFieldError};

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Contact service client speaking HTTP + JSON.
#[derive(Debug, Clone)]
pub struct HttpContactsApi {
    client: Client,
    base_url: String,
}

impl HttpContactsApi {
    /// Build an adapter for `base_url` (for example `http://host:5000/api`).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "contact service replied");
        read_envelope(status, body.as_ref())
    }
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    async fn list(&self) -> Result<Vec<Contact>, ApiError> {
        let envelope = self.exchange(self.client.get(self.contacts_url())).await?;
        into_data(envelope)
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ApiError> {
        let envelope = self
            .exchange(self.client.post(self.contacts_url()).json(draft))
            .await?;
        into_data(envelope)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.contacts_url());
        self.exchange::<IgnoredAny>(self.client.delete(url))
            .await
            .map(|_| ())
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::transport(error.to_string())
}

/// Decode an envelope, turning `success: false` into [`ApiError::Rejected`].
fn read_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Envelope<T>, ApiError> {
    let envelope: Envelope<T> = serde_json::from_slice(body).map_err(|error| {
        ApiError::decode(format!("status {}: {error}", status.as_u16()))
    })?;
    if envelope.success {
        return Ok(envelope);
    }
    let message = envelope
        .message
        .unwrap_or_else(|| join_messages(&envelope.errors));
    Err(ApiError::rejected(message, envelope.errors))
}

fn into_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::decode("successful response carried no data"))
}

fn join_messages(errors: &[ServiceFieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn validation_failure_joins_field_messages() {
        let body = br#"{"success":false,"errors":[
            {"field":"name","message":"Name is required"},
            {"field":"phone","message":"Enter valid phone (10-15 digits)"}]}"#;
        let err = read_envelope::<Contact>(StatusCode::BAD_REQUEST, body).expect_err("rejected");
        match err {
            ApiError::Rejected {
                message,
                field_errors,
            } => {
                assert_eq!(message, "Name is required, Enter valid phone (10-15 digits)");
                assert_eq!(field_errors.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    fn service_message_is_kept_verbatim() {
        let body = br#"{"success":false,"message":"Contact not found"}"#;
        let err = read_envelope::<IgnoredAny>(StatusCode::NOT_FOUND, body).expect_err("rejected");
        assert_eq!(err, ApiError::rejected("Contact not found", Vec::new()));
    }

    #[rstest]
    #[case(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>".as_slice())]
    #[case(StatusCode::OK, b"{}".as_slice())]
    fn unreadable_bodies_are_decode_errors(#[case] status: StatusCode, #[case] body: &[u8]) {
        let err = read_envelope::<Vec<Contact>>(status, body).expect_err("decode failure");
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[rstest]
    fn success_without_data_is_a_decode_error() {
        let envelope = read_envelope::<Contact>(StatusCode::CREATED, br#"{"success":true}"#)
            .expect("envelope");
        assert!(matches!(into_data(envelope), Err(ApiError::Decode { .. })));
    }

    #[rstest]
    fn trailing_slash_is_ignored() {
        let api = HttpContactsApi::new("http://localhost:5000/api/", Duration::from_secs(1))
            .expect("client");
        assert_eq!(api.contacts_url(), "http://localhost:5000/api/contacts");
    }
}
