//! Wire types for the sheet-script issuer API.
//!
//! Requests are JSON-encoded but POSTed with a plain-text content type; the
//! spreadsheet-script endpoint only accepts simple requests, so the header
//! must stay exactly as it is.

use serde::{Deserialize, Serialize};

use crate::models::{ClaimOutcome, LogAction};

/// Content type the issuer accepts for POST bodies.
pub const ISSUER_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// POST bodies sent to the issuer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action")]
pub enum IssuerRequest {
    /// Claim a redemption code for a (gift, user) pair.
    #[serde(rename = "CLAIM")]
    Claim {
        #[serde(rename = "giftId")]
        gift_id: String,
        #[serde(rename = "userId")]
        user_id: String,
    },

    /// Append a user activity record. The response is ignored.
    #[serde(rename = "LOG")]
    Log {
        #[serde(rename = "logAction")]
        log_action: LogAction,
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

/// Body of a claim response: `{"code": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimResponse {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl ClaimResponse {
    /// Collapse the response into a claim outcome. An explicit error wins
    /// over a code; a body carrying neither counts as unreadable.
    pub fn into_outcome(self) -> ClaimOutcome {
        if let Some(error) = self.error {
            ClaimOutcome::Rejected(error)
        } else if let Some(code) = self.code {
            ClaimOutcome::Issued(code)
        } else {
            ClaimOutcome::Unreachable
        }
    }
}
