mod messages;

pub use messages::{ClaimResponse, IssuerRequest, ISSUER_CONTENT_TYPE};
