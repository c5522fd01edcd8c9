//! HTTP client for the spreadsheet-script issuer.

use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::data::{fixture_gifts, fixture_questions, validate_questions};
use crate::models::{ClaimOutcome, Gift, Question, UserLogEvent};
use crate::protocol::{ClaimResponse, IssuerRequest, ISSUER_CONTENT_TYPE};

/// Client for the issuer endpoint.
///
/// Without a base URL the client runs offline: bundled fixture data and
/// locally generated codes. That keeps the booth usable with no network and
/// mirrors how the backend is stubbed out during events setup.
#[derive(Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl SheetClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.base_url.is_none()
    }

    /// Fetch the question set. Any failure (transport, status, parse, or an
    /// unusable payload) degrades to the bundled fixtures.
    pub async fn fetch_questions(&self) -> Vec<Question> {
        let Some(base) = &self.base_url else {
            return fixture_questions();
        };

        let url = format!("{}?type=questions", base);
        match self.get_json::<Vec<Question>>(&url).await {
            Ok(questions) => match validate_questions(&questions) {
                Ok(()) => questions,
                Err(err) => {
                    warn!("fetched question set is unusable ({}), using fixtures", err);
                    fixture_questions()
                }
            },
            Err(err) => {
                warn!("failed to fetch questions ({}), using fixtures", err);
                fixture_questions()
            }
        }
    }

    /// Fetch the gift inventory, degrading to fixtures like the questions.
    pub async fn fetch_gifts(&self) -> Vec<Gift> {
        let Some(base) = &self.base_url else {
            return fixture_gifts();
        };

        let url = format!("{}?type=gifts", base);
        match self.get_json::<Vec<Gift>>(&url).await {
            Ok(gifts) => gifts,
            Err(err) => {
                warn!("failed to fetch gifts ({}), using fixtures", err);
                fixture_gifts()
            }
        }
    }

    /// Request a redemption code for the chosen gift.
    ///
    /// Never errors: every failure mode collapses into a distinct
    /// [`ClaimOutcome`]. The client-side draw is optimistic, so the issuer
    /// may still reject the claim when stock ran out under us.
    pub async fn claim_code(&self, gift_id: &str, user_id: &str) -> ClaimOutcome {
        let Some(base) = &self.base_url else {
            let n: u32 = rand::rng().random_range(1000..=9999);
            return ClaimOutcome::Issued(format!("WIN-{}", n));
        };

        let request = IssuerRequest::Claim {
            gift_id: gift_id.to_string(),
            user_id: user_id.to_string(),
        };
        let body = serde_json::to_string(&request).unwrap_or_default();

        let response = match self
            .http
            .post(base)
            .header(CONTENT_TYPE, ISSUER_CONTENT_TYPE)
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("claim request did not complete: {}", err);
                return ClaimOutcome::Unreachable;
            }
        };

        match response.json::<ClaimResponse>().await {
            Ok(claim) => {
                let outcome = claim.into_outcome();
                if let ClaimOutcome::Rejected(reason) = &outcome {
                    warn!("issuer rejected claim for {}: {}", gift_id, reason);
                }
                outcome
            }
            Err(err) => {
                warn!("claim response was unreadable: {}", err);
                ClaimOutcome::Unreachable
            }
        }
    }

    /// Fire-and-forget log write. Failures are swallowed; the main flow
    /// never waits on this.
    pub fn log_event(&self, event: UserLogEvent) {
        debug!(
            "log {:?} user={} details={:?} at {}",
            event.action, event.user_id, event.details, event.timestamp
        );

        let Some(base) = self.base_url.clone() else {
            return;
        };

        let request = IssuerRequest::Log {
            log_action: event.action,
            user_id: event.user_id,
            details: event.details,
        };
        let body = serde_json::to_string(&request).unwrap_or_default();
        let http = self.http.clone();

        tokio::spawn(async move {
            if let Err(err) = http
                .post(&base)
                .header(CONTENT_TYPE, ISSUER_CONTENT_TYPE)
                .body(body)
                .send()
                .await
            {
                debug!("log write failed: {}", err);
            }
        });
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        response.json::<T>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_client_serves_fixtures() {
        let client = SheetClient::new(None);
        assert!(client.is_offline());

        let questions = client.fetch_questions().await;
        assert!(validate_questions(&questions).is_ok());

        let gifts = client.fetch_gifts().await;
        assert!(!gifts.is_empty());
    }

    #[tokio::test]
    async fn offline_claims_issue_win_codes() {
        let client = SheetClient::new(None);
        let outcome = client.claim_code("g1", "user-x").await;

        let ClaimOutcome::Issued(code) = outcome else {
            panic!("offline claim must issue a code");
        };
        let digits = code.strip_prefix("WIN-").expect("WIN- prefix");
        let n: u32 = digits.parse().expect("numeric suffix");
        assert!((1000..=9999).contains(&n));
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_not_crashes() {
        // Nothing listens on this port; both fetches must fall back and the
        // claim must map to the transport-failure token.
        let client = SheetClient::new(Some("http://127.0.0.1:9".to_string()));

        let questions = client.fetch_questions().await;
        assert!(validate_questions(&questions).is_ok());

        let gifts = client.fetch_gifts().await;
        assert!(!gifts.is_empty());

        let outcome = client.claim_code("g1", "user-x").await;
        assert_eq!(outcome, ClaimOutcome::Unreachable);
    }
}
