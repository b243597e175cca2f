use crate::{Error, Result};
use datasieve_types::{Payload, SieveResponse};
use std::time::Duration;
use url::Url;

/// Route the classification service exposes for submissions.
const SUBMIT_ROUTE: &str = "bfhl";

/// Ceiling on how long a submission may stay in flight. The worker thread
/// behind the form blocks on this call, so it must eventually return.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the classification service.
///
/// One `submit` call issues exactly one POST; there is no retry policy, and
/// every failure is terminal for the attempt.
#[derive(Debug)]
pub struct SieveClient {
    http: reqwest::blocking::Client,
    submit_url: Url,
}

impl SieveClient {
    /// Build a client for the given endpoint, e.g. `http://localhost:3001`.
    pub fn new(endpoint: &str) -> Result<Self> {
        let submit_url = Url::parse(&format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            SUBMIT_ROUTE
        ))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, submit_url })
    }

    /// Submit a validated payload and decode the service's verdict.
    ///
    /// The request body is the payload's serialization, `{"data": [...]}`,
    /// with the array order preserved.
    pub fn submit(&self, payload: &Payload) -> Result<SieveResponse> {
        let response = self
            .http
            .post(self.submit_url.clone())
            .json(payload)
            .send()?
            .error_for_status()?;

        let decoded: SieveResponse = response.json()?;

        if !decoded.is_success {
            return Err(Error::Processing);
        }

        Ok(decoded)
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }
}
