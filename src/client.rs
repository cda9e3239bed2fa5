//! Client side of the urlcounts contract: a blocking HTTP client for the
//! endpoint plus the form state machine the submit flow runs on.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::models::dto::{UrlcountsRequest, UrlcountsResponse};

/// Message shown when submit is pressed with an empty textarea.
pub const EMPTY_SUBMIT_MESSAGE: &str = "Please provide URLs for processing.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response, rendered as "<status> <body>".
    #[error("{status} {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking HTTP client for the `/urlcounts` endpoint.
pub struct UrlcountsClient {
    http: Client,
    endpoint: String,
}

impl UrlcountsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Posts the URL list and deserializes the typed response.
    pub fn submit(&self, urls: Vec<String>) -> Result<UrlcountsResponse, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&UrlcountsRequest { urls })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json()?)
    }
}

/// What the form is currently showing. One value, so states like
/// "submitting and already succeeded" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success(UrlcountsResponse),
    Error(String),
}

/// The submit form: textarea content plus a single view state.
#[derive(Debug, Default)]
pub struct UrlcountsForm {
    urls_text: String,
    state: FormState,
}

impl UrlcountsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn urls_text(&self) -> &str {
        &self.urls_text
    }

    pub fn set_urls_text(&mut self, text: impl Into<String>) {
        self.urls_text = text.into();
    }

    /// Resets the textarea and any error or result.
    pub fn clear(&mut self) {
        self.urls_text.clear();
        self.state = FormState::Idle;
    }

    /// Runs one submission through `transport`. A blank textarea produces a
    /// validation error without invoking the transport; a submission already
    /// in flight is left alone.
    pub fn submit<F>(&mut self, transport: F)
    where
        F: FnOnce(Vec<String>) -> Result<UrlcountsResponse, ClientError>,
    {
        if self.state == FormState::Submitting {
            return;
        }
        if self.urls_text.trim().is_empty() {
            self.state = FormState::Error(EMPTY_SUBMIT_MESSAGE.to_string());
            return;
        }

        let urls: Vec<String> = self.urls_text.split('\n').map(str::to_string).collect();
        self.state = FormState::Submitting;
        self.state = match transport(urls) {
            Ok(response) => FormState::Success(response),
            Err(err) => FormState::Error(err.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> UrlcountsResponse {
        UrlcountsResponse {
            count_urls_match_a_host: 1,
            count_urls_not_match_any_hosts: 0,
            count_urls_matched_per_host: vec!["example.com: 1".to_string()],
            urls_not_match_any_hosts: vec![],
        }
    }

    #[test]
    fn blank_submit_reports_validation_error_without_transport() {
        let mut form = UrlcountsForm::new();
        form.set_urls_text("   \n");

        let mut called = false;
        form.submit(|_| {
            called = true;
            Ok(sample_response())
        });

        assert!(!called);
        assert_eq!(
            form.state(),
            &FormState::Error(EMPTY_SUBMIT_MESSAGE.to_string())
        );
    }

    #[test]
    fn submit_splits_textarea_on_newlines_verbatim() {
        let mut form = UrlcountsForm::new();
        form.set_urls_text("http://a.test/1\n\nhttp://b.test/2");

        let mut sent = Vec::new();
        form.submit(|urls| {
            sent = urls;
            Ok(sample_response())
        });

        assert_eq!(sent, ["http://a.test/1", "", "http://b.test/2"]);
        assert_eq!(form.state(), &FormState::Success(sample_response()));
    }

    #[test]
    fn success_replaces_prior_error() {
        let mut form = UrlcountsForm::new();
        form.set_urls_text("http://a.test/1");
        form.submit(|_| {
            Err(ClientError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        });
        assert_eq!(form.state(), &FormState::Error("500 boom".to_string()));

        form.submit(|_| Ok(sample_response()));
        assert_eq!(form.state(), &FormState::Success(sample_response()));
    }

    #[test]
    fn failure_replaces_prior_result() {
        let mut form = UrlcountsForm::new();
        form.set_urls_text("http://a.test/1");
        form.submit(|_| Ok(sample_response()));
        assert!(matches!(form.state(), FormState::Success(_)));

        form.submit(|_| {
            Err(ClientError::Status {
                status: 400,
                body: "bad request".to_string(),
            })
        });
        assert_eq!(
            form.state(),
            &FormState::Error("400 bad request".to_string())
        );
    }

    #[test]
    fn clear_resets_text_and_state() {
        let mut form = UrlcountsForm::new();
        form.set_urls_text("http://a.test/1");
        form.submit(|_| Ok(sample_response()));

        form.clear();
        assert_eq!(form.urls_text(), "");
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[test]
    fn status_error_renders_status_then_body() {
        let err = ClientError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "404 not found");
    }
}
